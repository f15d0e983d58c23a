use super::*;
use crate::foundation::core::Rgba8;
use crate::scene::spawner::SpawnConfig;
use crate::screen::view::ViewBindings;

fn screen_with(view: ScreenView) -> ArScreen {
    let spawner = ObjectSpawner::new(SpawnConfig::default(), 7).unwrap();
    ArScreen::new(spawner, view)
}

fn counter(s: &ArScreen) -> &str {
    &s.view().counter_label().unwrap().text
}

#[test]
fn add_n_times_grows_list_with_creation_order_ids() {
    let mut s = screen_with(ScreenView::bound());
    for _ in 0..6 {
        s.dispatch(UiEvent::Add);
    }
    assert_eq!(s.objects().len(), 6);
    for (i, o) in s.objects().iter().enumerate() {
        assert_eq!(o.id, i);
    }
    assert_eq!(counter(&s), "AR objects: 6");
    assert_eq!(s.ui_failures(), 0);
}

#[test]
fn clear_empties_list_and_restarts_ids() {
    let mut s = screen_with(ScreenView::bound());
    s.dispatch(UiEvent::Add);
    s.dispatch(UiEvent::Add);
    s.dispatch(UiEvent::Clear);
    assert!(s.objects().is_empty());
    assert_eq!(counter(&s), "AR objects: 0");

    s.dispatch(UiEvent::Add);
    assert_eq!(s.objects().len(), 1);
    assert_eq!(s.objects()[0].id, 0);
    assert_eq!(counter(&s), "AR objects: 1");
}

#[test]
fn clear_on_empty_screen_is_harmless() {
    let mut s = screen_with(ScreenView::bound());
    s.dispatch(UiEvent::Clear);
    assert!(s.objects().is_empty());
    assert_eq!(s.ui_failures(), 0);
}

#[test]
fn list_order_is_stable_across_adds() {
    let mut s = screen_with(ScreenView::bound());
    s.dispatch(UiEvent::Add);
    let first = s.objects()[0].clone();
    s.dispatch(UiEvent::Add);
    s.dispatch(UiEvent::Add);
    assert_eq!(s.objects()[0], first);
}

#[test]
fn toggle_flips_flag_and_labels() {
    let mut s = screen_with(ScreenView::bound());
    assert!(s.is_animation_active());

    s.dispatch(UiEvent::Toggle);
    assert!(!s.is_animation_active());
    let status = s.view().status_label().unwrap();
    assert_eq!(status.text, "AR system paused");
    assert_eq!(status.color, Rgba8::ORANGE);
    assert_eq!(s.view().toggle_button().unwrap().text, "Resume tracking");
}

#[test]
fn toggling_twice_restores_initial_state() {
    let mut s = screen_with(ScreenView::bound());
    let before = s.view().clone();
    s.dispatch(UiEvent::Toggle);
    s.dispatch(UiEvent::Toggle);
    assert!(s.is_animation_active());
    assert_eq!(s.view(), &before);
    assert_eq!(s.view().status_label().unwrap().color, Rgba8::LIME);
}

#[test]
fn unbound_widgets_are_logged_and_swallowed() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let mut s = screen_with(ScreenView::detached());
    s.dispatch(UiEvent::Add);
    s.dispatch(UiEvent::Toggle);
    s.dispatch(UiEvent::Clear);

    // State still changes; only the widget updates fail.
    assert!(s.objects().is_empty());
    assert!(!s.is_animation_active());
    assert_eq!(s.ui_failures(), 3);
}

#[test]
fn handler_reports_missing_counter_label() {
    let mut s = screen_with(ScreenView::new(ViewBindings {
        counter_label: false,
        ..ViewBindings::default()
    }));
    let err = s.on_add_object().unwrap_err();
    assert!(err.to_string().contains("counter label"));
    assert_eq!(s.objects().len(), 1);

    // Toggle only touches the other widgets.
    assert!(s.on_toggle_tracking().is_ok());
}

#[test]
fn missing_toggle_button_skips_status_update() {
    let mut s = screen_with(ScreenView::new(ViewBindings {
        toggle_button: false,
        ..ViewBindings::default()
    }));
    s.dispatch(UiEvent::Toggle);
    assert!(!s.is_animation_active());
    assert_eq!(s.ui_failures(), 1);
    assert_eq!(s.view().status_label().unwrap().text, "AR system active");
}
