use chemsketch::canvas::Canvas;
use chemsketch::{ActionType, SketchSnapshot};
use egui::pos2;

fn built_up_canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.select_action(ActionType::Main).unwrap();
    canvas.submit_entry("6").unwrap();
    canvas.submit_entry("n").unwrap();
    canvas.primary_click(pos2(300.0, 400.0));

    canvas.select_action(ActionType::Side).unwrap();
    canvas.submit_entry("2").unwrap();
    canvas.submit_entry("y").unwrap();
    let target = canvas.attachable_nodes()[0].clone();
    canvas.primary_click(target.pos);

    canvas.select_action(ActionType::Bond).unwrap();
    canvas.submit_entry("3").unwrap();
    let target = canvas.bondable_nodes()[3].clone();
    canvas.primary_click(target.pos);

    canvas
}

#[test]
fn snapshot_restores_the_committed_sketch() {
    let original = built_up_canvas();
    let json = original.snapshot().to_json().unwrap();

    let snapshot = SketchSnapshot::from_json(&json).unwrap();
    let mut restored = Canvas::new();
    restored.restore(&snapshot);

    assert!(restored.main_committed());
    assert_eq!(restored.compound(), original.compound());
    assert_eq!(restored.main_nodes(), original.main_nodes());
    assert_eq!(restored.side_attachments(), original.side_attachments());
    assert_eq!(restored.bonds(), original.bonds());
}

#[test]
fn snapshot_survives_a_file_round_trip() {
    let original = built_up_canvas();
    let path = std::env::temp_dir().join("chemsketch-test-sketch.json");

    original.snapshot().save_to(&path).unwrap();
    let loaded = SketchSnapshot::load_from(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut restored = Canvas::new();
    restored.restore(&loaded);
    assert_eq!(restored.compound(), original.compound());
    assert_eq!(restored.bonds(), original.bonds());
}

#[test]
fn restoring_replaces_previous_contents() {
    let mut canvas = built_up_canvas();
    let empty = Canvas::new().snapshot();

    canvas.restore(&empty);
    assert!(!canvas.main_committed());
    assert!(canvas.main_nodes().is_empty());
    assert!(canvas.bonds().is_empty());
    assert!(canvas.side_attachments().is_empty());
}

#[test]
fn snapshot_mid_side_flow_drops_the_unplaced_chain() {
    let mut canvas = Canvas::new();
    canvas.select_action(ActionType::Main).unwrap();
    canvas.submit_entry("6").unwrap();
    canvas.submit_entry("n").unwrap();
    canvas.primary_click(pos2(300.0, 400.0));

    // Size entered but the chain never placed: it must not reach the
    // snapshot, where it would have no matching attachment.
    canvas.select_action(ActionType::Side).unwrap();
    canvas.submit_entry("4").unwrap();

    let snapshot = canvas.snapshot();
    let mut restored = Canvas::new();
    restored.restore(&snapshot);
    assert!(restored.compound().sides().is_empty());
    assert!(restored.side_attachments().is_empty());

    // A side chain committed after restoring pairs with its own
    // attachment, not a leftover from the interrupted flow.
    restored.select_action(ActionType::Side).unwrap();
    restored.submit_entry("2").unwrap();
    restored.submit_entry("n").unwrap();
    let target = restored.attachable_nodes()[0].clone();
    restored.primary_click(target.pos);

    assert_eq!(restored.side_attachments().len(), 1);
    assert_eq!(restored.compound().sides().len(), 1);
    assert_eq!(restored.compound().sides()[0].size(), 2);
    assert_eq!(
        restored.compound().sides()[0].location(),
        Some(target.locant)
    );
}

#[test]
fn broken_json_is_an_error_not_a_panic() {
    assert!(SketchSnapshot::from_json("{\"version\": 3}").is_err());
}
