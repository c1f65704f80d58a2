use approx::assert_abs_diff_eq;
use glam::Vec2;
use newman_projection_editor::core::{measure_label_widths, ApproxTextMeasure};
use newman_projection_editor::{
    AppCommand, AppController, AppIntent, AppState, ConformationKind, DragState, SlotId,
};

fn state_300() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [300.0, 300.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn position(state: &AppState, slot: SlotId) -> Vec2 {
    state
        .scene
        .substituent(slot)
        .position
        .expect("Position sollte aufgelöst sein")
}

fn press(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    let label_widths = measure_label_widths(
        &state.scene.substituents,
        &ApproxTextMeasure,
        state.options.font_size,
    );
    controller
        .handle_intent(state, AppIntent::PointerPressed { pos, label_widths })
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

fn drag_label(
    controller: &mut AppController,
    state: &mut AppState,
    slot: SlotId,
    delta: Vec2,
) -> Vec2 {
    let start = position(state, slot);
    press(controller, state, start);
    controller
        .handle_intent(state, AppIntent::PointerMoved { pos: start + delta })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
    start
}

#[test]
fn test_eclipsed_scenario_places_labels_at_bond_ends() {
    let (mut controller, mut state) = state_300();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ConformationSelected {
                kind: ConformationKind::Eclipsed,
            },
        )
        .expect("ConformationSelected sollte ohne Fehler durchlaufen");

    let front0 = position(&state, SlotId::ALL[0]);
    let back0 = position(&state, SlotId::ALL[3]);
    assert_abs_diff_eq!(front0.x, 150.0, epsilon = 1e-3);
    assert_abs_diff_eq!(front0.y, 85.0, epsilon = 1e-3);
    assert_abs_diff_eq!(back0.x, 150.0, epsilon = 1e-3);
    assert_abs_diff_eq!(back0.y, 215.0, epsilon = 1e-3);
}

#[test]
fn test_dragged_label_keeps_position_across_changes() {
    let (mut controller, mut state) = state_300();
    let dragged = SlotId::ALL[1];

    let start = drag_label(&mut controller, &mut state, dragged, Vec2::new(10.0, 10.0));
    let after_drag = position(&state, dragged);
    assert_abs_diff_eq!(after_drag.x, start.x + 10.0, epsilon = 1e-3);
    assert_abs_diff_eq!(after_drag.y, start.y + 10.0, epsilon = 1e-3);
    assert_eq!(state.drag, DragState::Idle);

    let front0_before = position(&state, SlotId::ALL[0]);
    let back0_before = position(&state, SlotId::ALL[3]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ConformationSelected {
                kind: ConformationKind::Eclipsed,
            },
        )
        .expect("ConformationSelected sollte ohne Fehler durchlaufen");
    assert_eq!(position(&state, dragged), after_drag);
    assert_ne!(position(&state, SlotId::ALL[3]), back0_before);

    controller
        .handle_intent(&mut state, AppIntent::RotateRequested)
        .expect("RotateRequested sollte ohne Fehler durchlaufen");
    assert_eq!(position(&state, dragged), after_drag);

    // Vordere Winkel sind fest: Bewegung nur über die Canvas-Größe
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [400.0, 400.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    assert_eq!(position(&state, dragged), after_drag);
    let front0 = position(&state, SlotId::ALL[0]);
    assert_ne!(front0, front0_before);
    assert_abs_diff_eq!(front0.x, 200.0, epsilon = 1e-3);
    assert_abs_diff_eq!(front0.y, 200.0 - 80.0 - 5.0, epsilon = 1e-3);

    let sub = state.scene.substituent(dragged);
    assert!(sub.dragged);
    assert!(!sub.dragging);
}

#[test]
fn test_press_outside_labels_does_not_start_drag() {
    let (mut controller, mut state) = state_300();

    press(&mut controller, &mut state, Vec2::new(5.0, 5.0));

    assert_eq!(state.drag, DragState::Idle);
    assert!(state
        .command_log
        .entries()
        .iter()
        .all(|c| !matches!(c, AppCommand::BeginLabelDrag { .. })));
}

#[test]
fn test_rotate_steps_follow_parity_rule() {
    let (mut controller, mut state) = state_300();
    assert_eq!(state.scene.conformation.effective_rotation(), 60.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ConformationSelected {
                kind: ConformationKind::Eclipsed,
            },
        )
        .expect("ConformationSelected sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::EclipsedOffsetChanged { degrees: 10.0 })
        .expect("EclipsedOffsetChanged sollte ohne Fehler durchlaufen");
    assert_eq!(state.scene.conformation.effective_rotation(), 10.0);

    let mut rotations = Vec::new();
    for _ in 0..3 {
        controller
            .handle_intent(&mut state, AppIntent::RotateRequested)
            .expect("RotateRequested sollte ohne Fehler durchlaufen");
        rotations.push(state.scene.conformation.effective_rotation());
    }

    assert_eq!(rotations, vec![60.0, 130.0, 180.0]);
    assert_eq!(state.frame().rotation_degrees, 180.0);
}

#[test]
fn test_first_rotate_from_initial_state_moves_back_labels() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let rotation_before = state.scene.conformation.effective_rotation();
    let back0_before = position(&state, SlotId::ALL[3]);

    controller
        .handle_intent(&mut state, AppIntent::RotateRequested)
        .expect("RotateRequested sollte ohne Fehler durchlaufen");

    assert_ne!(state.scene.conformation.effective_rotation(), rotation_before);
    assert_ne!(position(&state, SlotId::ALL[3]), back0_before);
}

#[test]
fn test_viewport_resize_marks_state_changed() {
    let (mut controller, mut state) = state_300();
    let recorded = state.command_log.total_recorded();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [300.0, 300.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    assert_eq!(state.command_log.total_recorded(), recorded);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [500.0, 500.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    assert_eq!(state.command_log.total_recorded(), recorded + 1);
    assert_eq!(state.scene.dimensions.canvas_size, [500.0, 500.0]);
    assert_eq!(state.frame().center, Vec2::new(250.0, 250.0));
}

#[test]
fn test_subscript_inserted_at_focused_cursor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let slot = SlotId::ALL[4];

    controller
        .handle_intent(
            &mut state,
            AppIntent::LabelEdited {
                slot,
                text: "CH".to_string(),
            },
        )
        .expect("LabelEdited sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LabelCursorMoved {
                slot,
                cursor: Some(2),
            },
        )
        .expect("LabelCursorMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::SubscriptDigitRequested { digit: 3 })
        .expect("SubscriptDigitRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.scene.substituent(slot).label, "CH₃");

    match state.command_log.last() {
        Some(AppCommand::InsertSubscript {
            slot: logged,
            cursor: Some(2),
            digit: 3,
        }) => assert_eq!(*logged, slot),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(state.command_log.last(), Some(&AppCommand::RequestExit));
}
