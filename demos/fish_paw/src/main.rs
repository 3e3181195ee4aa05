use std::io::BufRead;

use clap::Parser;
use duet_ui::{RenderBackend, Scheduler, TextBackend, with_theme};
use fish_paw::{Command, Config, FishPawApp};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();
    with_theme(config.theme.theme(), || run(config.commands))
}

fn run(script: Vec<Command>) -> anyhow::Result<()> {
    let app = FishPawApp::new();
    let mut sched = Scheduler::new();
    let stdout = std::io::stdout();
    let mut backend = TextBackend::new(stdout.lock());

    let mut frame = sched.compose(|_| app.view());
    backend.frame(&frame)?;

    let interactive = script.is_empty();
    let commands: Box<dyn Iterator<Item = anyhow::Result<Command>>> = if interactive {
        log::info!("reading commands from stdin: fish, paw, all, quit or a view id");
        Box::new(
            std::io::stdin()
                .lock()
                .lines()
                .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
                .map(|line| -> anyhow::Result<Command> { line?.parse() }),
        )
    } else {
        Box::new(script.into_iter().map(Ok))
    };

    for command in commands {
        let command = match command {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        if !app.dispatch(&frame, command) {
            eprintln!("{command:?}: nothing to click");
            continue;
        }
        frame = sched.compose(|_| app.view());
        backend.frame(&frame)?;
    }

    log::info!("done after {} frame(s)", backend.frames());
    app.dispose();
    Ok(())
}
