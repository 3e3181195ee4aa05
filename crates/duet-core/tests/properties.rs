//! Properties of togglers and boolean mutexes over arbitrary write sequences.

use duet_core::*;
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Write {
    Set(Side, bool),
    Flip(Side),
    ToggleSet(Side, bool),
    MutexFlip,
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Boolean), Just(Side::Versa)]
}

fn write_strategy() -> impl Strategy<Value = Write> {
    prop_oneof![
        (side_strategy(), any::<bool>()).prop_map(|(side, b)| Write::Set(side, b)),
        side_strategy().prop_map(Write::Flip),
        (side_strategy(), any::<bool>()).prop_map(|(side, b)| Write::ToggleSet(side, b)),
        Just(Write::MutexFlip),
    ]
}

proptest! {
    /// `versa == !boolean` after every single write, whichever handle made it
    #[test]
    fn bool_mutex_sides_stay_complementary(
        initial in any::<bool>(),
        writes in prop::collection::vec(write_strategy(), 0..64),
    ) {
        let (boolean, versa) = bool_mutex(initial);
        let toggle_boolean = toggle_from(boolean.clone());
        let toggle_versa = toggle_from(versa.clone());
        let pick = |side: Side| match side {
            Side::Boolean => (&boolean, &toggle_boolean),
            Side::Versa => (&versa, &toggle_versa),
        };
        prop_assert_eq!(versa.get(), !boolean.get());

        for write in writes {
            let expected = match write {
                Write::Set(side, b) => {
                    pick(side).0.set(b);
                    Some((side, b))
                }
                Write::Flip(side) => {
                    let before = pick(side).0.get();
                    prop_assert_eq!(pick(side).1.toggle(), !before);
                    Some((side, !before))
                }
                Write::ToggleSet(side, b) => {
                    prop_assert_eq!(pick(side).1.set(b), b);
                    Some((side, b))
                }
                Write::MutexFlip => {
                    boolean.mutex().flip();
                    None
                }
            };
            if let Some((side, b)) = expected {
                prop_assert_eq!(pick(side).0.get(), b);
            }
            prop_assert_eq!(versa.get(), !boolean.get());
        }
    }

    /// Two flips restore the starting value in owning mode
    #[test]
    fn owned_toggle_is_an_involution(initial in any::<bool>(), flips in 0usize..16) {
        let (cell, toggle) = use_toggle(initial);
        for _ in 0..flips {
            toggle.toggle();
        }
        prop_assert_eq!(cell.get(), initial ^ (flips % 2 == 1));

        toggle.toggle();
        toggle.toggle();
        prop_assert_eq!(cell.get(), initial ^ (flips % 2 == 1));
    }

    /// An explicit set stores the value as given and repeating it changes nothing
    #[test]
    fn adapter_set_is_idempotent(
        initial in any::<bool>(),
        values in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let cell = signal(initial);
        let toggle = toggle_from(cell.clone());
        for b in values {
            prop_assert_eq!(toggle.set(b), b);
            prop_assert_eq!(cell.get(), b);
            prop_assert_eq!(toggle.call(Some(b)), b);
            prop_assert_eq!(cell.get(), b);
        }
    }
}
