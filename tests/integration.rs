// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};

use iced_folio::config::{self, defaults, Config};
use iced_folio::content::SectionId;
use iced_folio::ui::notifications::{Manager, Phase, Severity, Timings};
use iced_folio::ui::state::{FocusTrap, TabDirection, TabOutcome};
use tempfile::tempdir;

#[test]
fn config_round_trips_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.motion.typing_speed_ms = Some(120);
    config.notifications.display_ms = Some(8_000);

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(loaded, config);
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn corrupt_config_degrades_to_defaults_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "not [valid toml")
        .expect("Failed to write corrupt config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn notification_lifecycle_runs_to_removal() {
    let mut manager = Manager::new();
    let created = Instant::now();
    manager.notify("saved", Severity::Info, Timings::default(), created);

    // Hidden at birth, visible after the show delay, gone after the
    // display time plus the exit animation.
    let phases: Vec<Phase> = [0, 100, 4_999, 5_000, 5_299, 5_300]
        .into_iter()
        .flat_map(|ms| {
            manager
                .iter_at(created + Duration::from_millis(ms))
                .map(|(_, phase)| phase)
                .collect::<Vec<_>>()
        })
        .collect();

    assert_eq!(
        phases,
        vec![
            Phase::Entering,
            Phase::Visible,
            Phase::Visible,
            Phase::Leaving,
            Phase::Leaving,
        ]
    );

    manager.sweep(created + Duration::from_millis(5_300));
    assert!(!manager.has_live());
}

#[test]
fn manual_dismissal_skips_the_remaining_display_time() {
    let mut manager = Manager::new();
    let created = Instant::now();
    let id = manager.notify("saved", Severity::Info, Timings::default(), created);

    let dismissed = created + Duration::from_millis(500);
    assert!(manager.dismiss(id, dismissed));
    assert!(!manager.dismiss(id, dismissed + Duration::from_millis(1)));

    let exit = Duration::from_millis(defaults::DEFAULT_NOTIFICATION_EXIT_MS);
    assert_eq!(manager.iter_at(dismissed).count(), 1);
    assert_eq!(manager.iter_at(dismissed + exit).count(), 0);
}

#[test]
fn focus_trap_cycles_through_the_menu_entries_and_back() {
    let mut trap = FocusTrap::open(SectionId::ALL.to_vec());
    assert_eq!(trap.focused(), Some(SectionId::About));

    // A full forward pass visits every entry, then wraps.
    for _ in 1..SectionId::ALL.len() {
        assert_eq!(trap.handle_tab(TabDirection::Forward), TabOutcome::PassThrough);
        trap.step(TabDirection::Forward);
    }
    assert_eq!(trap.focused(), Some(SectionId::Contact));
    assert_eq!(
        trap.handle_tab(TabDirection::Forward),
        TabOutcome::Wrapped(SectionId::About)
    );

    // And backward from the first entry wraps to the last.
    assert_eq!(
        trap.handle_tab(TabDirection::Backward),
        TabOutcome::Wrapped(SectionId::Contact)
    );
}
