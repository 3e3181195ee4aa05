//! "You can't have both the fish and the bear paw."
//!
//! Two labels bound to a [`BoolMutex`]: clicking either one flips the pair.
//! The button below toggles an "all" flag that swaps both labels for a
//! placeholder, and swaps its own background on every click.

use std::rc::Rc;
use std::str::FromStr;

use duet_core::*;
use duet_ui::*;

pub const PLACEHOLDER: &str = "做你的白日梦去吧！";

pub const THEME_VAR: &str = "FISH_PAW_THEME";

fn fish_text(fish: bool) -> String {
    format!("{}了鱼，", if fish { "你得到" } else { "虽然你失去" })
}

fn bear_paw_text(bear_paw: bool) -> String {
    format!("{}了熊掌！", if bear_paw { "但是你得到" } else { "却失去" })
}

fn button_text(all: bool) -> &'static str {
    if all { "重新选择" } else { "全都要" }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fish,
    BearPaw,
    All,
    /// Click a hit region by id.
    Id(ViewId),
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        Ok(match s.to_ascii_lowercase().as_str() {
            "fish" | "f" => Command::Fish,
            "paw" | "bear" | "p" => Command::BearPaw,
            "all" | "a" => Command::All,
            "quit" | "q" | "exit" => Command::Quit,
            other => match other.parse::<ViewId>() {
                Ok(id) => Command::Id(id),
                Err(_) => {
                    anyhow::bail!("unknown command {s:?} (try fish, paw, all, quit or an id)")
                }
            },
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Light => Theme::default(),
            ThemeName::Dark => Theme::dark(),
        }
    }
}

/// Click through the fish and bear paw demo.
///
/// With no commands, clicks are read from stdin one per line.
#[derive(Debug, clap::Parser)]
#[command(name = "fish-paw", version)]
pub struct Config {
    /// Button background palette
    #[arg(long, env = THEME_VAR, value_enum, default_value_t = ThemeName::Light)]
    pub theme: ThemeName,

    /// Click script: fish, paw, all, quit or a view id
    pub commands: Vec<Command>,
}

pub struct FishPawApp {
    all: Signal<bool>,
    toggle_all: Toggler,
    fish: MutexSide,
    toggle_fish: Toggler,
    toggle_bear_paw: Toggler,
    fish_label: Derived<String>,
    bear_paw_label: Derived<String>,
    button_label: Derived<&'static str>,
    background: Signal<Color>,
    swap_background: Rc<ValueMutex<Color>>,
    scope: Scope,
}

impl FishPawApp {
    /// Reads the current [`theme`] for the two button backgrounds.
    pub fn new() -> Self {
        let theme = theme();
        let (all, toggle_all) = use_toggle(false);
        let (fish, bear_paw) = bool_mutex(false);
        let toggle_fish = toggle_from(fish.clone());
        let toggle_bear_paw = toggle_from(bear_paw.clone());

        let swap_background = Rc::new(value_mutex((
            theme.button_background,
            theme.button_background_alt,
        )));
        let background = signal(swap_background.next());

        let fish_label = derived({
            let fish = fish.clone();
            move || fish_text(fish.get())
        });
        let bear_paw_label = derived({
            let bear_paw = bear_paw.clone();
            move || bear_paw_text(bear_paw.get())
        });
        let button_label = derived({
            let all = all.clone();
            move || button_text(all.get())
        });

        let scope = Scope::new();
        scope.run(|| {
            effect({
                let all = all.clone();
                move || all.watch(|v| log::info!("all -> {v}"))
            });
            effect({
                let fish = fish.clone();
                move || fish.watch(|v| log::info!("fish -> {v}, bear paw -> {}", !v))
            });
            effect({
                let background = background.clone();
                move || background.watch(|c| log::debug!("button background -> {c}"))
            });
        });

        Self {
            all,
            toggle_all,
            fish,
            toggle_fish,
            toggle_bear_paw,
            fish_label,
            bear_paw_label,
            button_label,
            background,
            swap_background,
            scope,
        }
    }

    pub fn all(&self) -> bool {
        self.all.get_untracked()
    }

    pub fn fish(&self) -> bool {
        self.fish.get_untracked()
    }

    pub fn bear_paw(&self) -> bool {
        self.fish.other().get_untracked()
    }

    pub fn background(&self) -> Color {
        self.background.get_untracked()
    }

    pub fn view(&self) -> View {
        let content = if self.all.get() {
            Text(PLACEHOLDER)
        } else {
            Fragment(vec![
                Text(self.fish_label.get())
                    .modifier(Modifier::new().on_click(self.toggle_fish.handler())),
                Text(self.bear_paw_label.get())
                    .modifier(Modifier::new().on_click(self.toggle_bear_paw.handler())),
            ])
        };

        let on_click = {
            let toggle_all = self.toggle_all.clone();
            let swap = self.swap_background.clone();
            let background = self.background.clone();
            move || {
                toggle_all.toggle();
                background.set(swap.next());
            }
        };
        let button = Button(self.button_label.get(), on_click)
            .modifier(Modifier::new().background(self.background.get()));

        Fragment(vec![content, button])
    }

    /// Clicks the view a command names. Returns false when it is not on
    /// screen in `frame` (or for `Quit`).
    pub fn dispatch(&self, frame: &Frame, command: Command) -> bool {
        let target = match command {
            Command::Fish => frame.find_text(&self.fish_label.get_untracked()),
            Command::BearPaw => frame.find_text(&self.bear_paw_label.get_untracked()),
            Command::All => frame.find_text(self.button_label.get_untracked()),
            Command::Id(id) => Some(id),
            Command::Quit => None,
        };
        match target {
            Some(id) => frame.click(id),
            None => {
                log::warn!("{command:?}: nothing to click in this frame");
                false
            }
        }
    }

    /// Tears down the watchers registered at startup.
    pub fn dispose(self) {
        self.scope.dispose();
    }
}

impl Default for FishPawApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn compose(s: &mut Scheduler, app: &FishPawApp) -> Frame {
        s.compose(|_| app.view())
    }

    #[test]
    fn test_fish_then_all_keeps_choice() {
        let app = FishPawApp::new();
        let mut s = Scheduler::new();

        let frame = compose(&mut s, &app);
        assert!(!app.all());
        assert!(!app.fish());
        assert!(app.bear_paw());
        assert_eq!(
            frame.texts(),
            vec!["虽然你失去了鱼，", "但是你得到了熊掌！", "全都要"]
        );

        assert!(app.dispatch(&frame, Command::Fish));
        assert!(app.fish());
        assert!(!app.bear_paw());
        let frame = compose(&mut s, &app);
        assert_eq!(frame.texts(), vec!["你得到了鱼，", "却失去了熊掌！", "全都要"]);

        assert!(app.dispatch(&frame, Command::All));
        assert!(app.all());
        let frame = compose(&mut s, &app);
        assert_eq!(frame.texts(), vec![PLACEHOLDER, "重新选择"]);
        // the labels are gone, so they cannot be clicked
        assert!(!app.dispatch(&frame, Command::Fish));

        assert!(app.dispatch(&frame, Command::All));
        assert!(!app.all());
        assert!(app.fish());
        assert!(!app.bear_paw());
        let frame = compose(&mut s, &app);
        assert_eq!(frame.texts(), vec!["你得到了鱼，", "却失去了熊掌！", "全都要"]);
    }

    #[test]
    fn test_labels_stay_exclusive() {
        let app = FishPawApp::new();
        let mut s = Scheduler::new();
        let clicks = [
            Command::BearPaw,
            Command::Fish,
            Command::Fish,
            Command::All,
            Command::All,
            Command::BearPaw,
        ];
        for command in clicks {
            let frame = compose(&mut s, &app);
            app.dispatch(&frame, command);
            assert_ne!(app.fish(), app.bear_paw());
        }
    }

    #[test]
    fn test_button_background_swaps_on_each_click() {
        let theme = Theme::default();
        let app = FishPawApp::new();
        let mut s = Scheduler::new();

        let mut seen = Vec::new();
        for _ in 0..3 {
            let frame = compose(&mut s, &app);
            let button = frame.find_text(button_text(app.all())).unwrap();
            seen.push(frame.view(button).and_then(|v| v.modifier.background));
            assert!(frame.click(button));
        }
        assert_eq!(
            seen,
            vec![
                Some(theme.button_background),
                Some(theme.button_background_alt),
                Some(theme.button_background),
            ]
        );
        assert_eq!(app.background(), theme.button_background_alt);
    }

    #[test]
    fn test_app_reads_theme_at_startup() {
        let dark = Theme::dark();
        let app = with_theme(dark, FishPawApp::new);
        assert_eq!(app.background(), dark.button_background);
        app.dispose();
    }

    #[test]
    fn test_click_by_id() {
        let app = FishPawApp::new();
        let mut s = Scheduler::new();
        let frame = compose(&mut s, &app);
        let paw = frame.find_text("熊掌").unwrap();

        assert!(app.dispatch(&frame, Command::Id(paw)));
        assert!(app.fish());
        assert!(!app.dispatch(&frame, Command::Id(999)));
        assert!(!app.dispatch(&frame, Command::Quit));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("fish".parse::<Command>().unwrap(), Command::Fish);
        assert_eq!(" PAW ".parse::<Command>().unwrap(), Command::BearPaw);
        assert_eq!("a".parse::<Command>().unwrap(), Command::All);
        assert_eq!("7".parse::<Command>().unwrap(), Command::Id(7));
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert!("both".parse::<Command>().is_err());
    }

    #[test]
    fn test_config_parses_theme_and_script() {
        let config =
            Config::try_parse_from(["fish-paw", "--theme", "dark", "fish", "all"]).unwrap();
        assert_eq!(config.theme.theme(), Theme::dark());
        assert_eq!(config.commands, vec![Command::Fish, Command::All]);

        let config = Config::try_parse_from(["fish-paw", "--theme", "light"]).unwrap();
        assert_eq!(config.theme, ThemeName::Light);
        assert!(config.commands.is_empty());

        assert!(Config::try_parse_from(["fish-paw", "--theme", "neon"]).is_err());
        assert!(Config::try_parse_from(["fish-paw", "jump"]).is_err());
    }

    #[test]
    fn test_config_help_is_not_a_click() {
        let err = Config::try_parse_from(["fish-paw", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
