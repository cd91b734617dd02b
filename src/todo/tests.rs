use super::*;
use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(m: &mut Model, text: &str) {
    for c in text.chars() {
        m.update(key(KeyCode::Char(c)));
    }
}

fn plain(m: &Model) -> String {
    strip_ansi_escapes::strip_str(m.view())
}

#[test]
fn test_simple_starts_empty_with_input_focused() {
    let m = new(Variant::Simple);
    assert!(m.list().is_empty());
    assert_eq!(m.focus_target(), Focus::Input);
    assert!(plain(&m).contains("No todos yet"));
}

#[test]
fn test_enter_adds_and_clears_input() {
    let mut m = new(Variant::Simple);
    type_text(&mut m, "buy milk");
    m.update(key(KeyCode::Enter));
    assert_eq!(m.list().len(), 1);
    assert_eq!(m.list().items()[0].text, "buy milk");
    assert_eq!(m.input().value(), "");
    assert!(plain(&m).contains("[ ] buy milk"));
}

#[test]
fn test_blank_input_rejected_and_kept() {
    let mut m = new(Variant::Simple);
    type_text(&mut m, "   ");
    m.update(key(KeyCode::Enter));
    assert!(m.list().is_empty());
    assert_eq!(m.input().value(), "   ");
}

#[test]
fn test_simple_persists_every_change() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut m = simple(Box::new(FileStorage::new(dir.path())));
    m.add("one");
    m.add("two");
    let id = m.list().items()[0].id.clone();
    m.toggle(&id);

    let reloaded = simple(Box::new(FileStorage::new(dir.path())));
    assert_eq!(reloaded.list().items(), m.list().items());
    assert!(reloaded.list().items()[0].completed);

    m.remove(&id);
    let reloaded = simple(Box::new(FileStorage::new(dir.path())));
    assert_eq!(reloaded.list().len(), 1);
}

#[test]
fn test_mounted_alone_is_persisted_simple_face() {
    let (m, cmd) = <Model as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert_eq!(m.variant(), Variant::Simple);
    assert!(m.persisted());
    assert_eq!(m.store_key(), DEFAULT_KEY);
}

#[test]
fn test_remount_keeps_items() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut m = simple(Box::new(FileStorage::new(dir.path())));
    assert!(m.persisted());
    m.add("survives restart");
    drop(m);

    let m = simple(Box::new(FileStorage::new(dir.path())));
    assert_eq!(m.list().len(), 1);
    assert_eq!(m.list().items()[0].text, "survives restart");
}

#[test]
fn test_unstored_faces_are_not_persisted() {
    assert!(!new(Variant::Dynamic).persisted());
    assert!(!new(Variant::Island).persisted());
}

#[test]
fn test_simple_with_malformed_store_starts_empty() {
    let mut store = MemoryStorage::new();
    store.insert_raw(DEFAULT_KEY, "not json at all");
    let m = simple(Box::new(store));
    assert!(m.list().is_empty());
}

#[test]
fn test_list_navigation_toggle_and_delete() {
    let mut m = new(Variant::Simple);
    m.add("a");
    m.add("b");
    m.add("c");
    m.update(key(KeyCode::Tab));
    assert_eq!(m.focus_target(), Focus::List);

    m.update(key(KeyCode::Char('j')));
    m.update(key(KeyCode::Down));
    m.update(key(KeyCode::Down));
    assert_eq!(m.cursor(), 2);
    m.update(key(KeyCode::Char('k')));
    assert_eq!(m.cursor(), 1);

    m.update(key(KeyCode::Char(' ')));
    assert!(m.list().items()[1].completed);
    assert!(plain(&m).contains("> [x] b"));

    m.update(key(KeyCode::Char('d')));
    let texts: Vec<&str> = m.list().items().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "c"]);
}

#[test]
fn test_cursor_stays_in_bounds_after_delete() {
    let mut m = new(Variant::Simple);
    m.add("a");
    m.add("b");
    m.update(key(KeyCode::Tab));
    m.update(key(KeyCode::Down));
    m.update(key(KeyCode::Delete));
    assert_eq!(m.cursor(), 0);
    m.update(key(KeyCode::Delete));
    assert!(m.list().is_empty());
    assert_eq!(m.cursor(), 0);
    m.update(key(KeyCode::Delete));
}

#[test]
fn test_typing_in_list_focus_does_not_edit_input() {
    let mut m = new(Variant::Simple);
    m.update(key(KeyCode::Tab));
    type_text(&mut m, "x");
    assert_eq!(m.input().value(), "");
}

#[test]
fn test_dynamic_seed_and_header() {
    let m = new(Variant::Dynamic);
    assert_eq!(m.list().len(), 5);
    assert_eq!(m.list().completed_count(), 2);
    assert!(plain(&m).contains("2 of 5 tasks completed"));
}

#[test]
fn test_dynamic_prepends() {
    let mut m = new(Variant::Dynamic);
    type_text(&mut m, "new task");
    m.update(key(KeyCode::Enter));
    assert_eq!(m.list().items()[0].text, "new task");
    assert!(plain(&m).contains("2 of 6 tasks completed"));
}

#[test]
fn test_dynamic_toggle_sinks_item() {
    let mut m = new(Variant::Dynamic);
    m.toggle("1");
    let ids: Vec<&str> = m.list().items().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1", "4", "5"]);
}

#[test]
fn test_dynamic_hide_completed() {
    let mut m = new(Variant::Dynamic);
    m.update(key(KeyCode::Tab));
    m.update(key(KeyCode::Char('h')));
    assert!(!m.show_completed());
    assert_eq!(m.visible().len(), 3);
    assert!(!plain(&m).contains("usability testing"));
    m.update(key(KeyCode::Char('h')));
    assert_eq!(m.visible().len(), 5);
}

#[test]
fn test_h_only_hides_on_dynamic() {
    let mut m = new(Variant::Simple);
    m.add("a");
    m.update(key(KeyCode::Tab));
    m.update(key(KeyCode::Char('h')));
    assert!(m.show_completed());
}

#[test]
fn test_island_collapsed_shows_counts() {
    let mut m = new(Variant::Island);
    assert!(!m.expanded());
    m.add("a");
    m.add("b");
    let id = m.list().items()[0].id.clone();
    m.toggle(&id);
    let view = plain(&m);
    assert!(view.contains("To-do List"));
    assert!(view.contains("1 left"));
    assert!(view.contains("1 done"));
    assert!(!view.contains("[ ]"));
}

#[test]
fn test_island_ignores_typing_while_collapsed() {
    let mut m = new(Variant::Island);
    type_text(&mut m, "abc");
    assert_eq!(m.input().value(), "");
}

#[test]
fn test_island_expand_collapse() {
    let mut m = new(Variant::Island);
    m.update(key(KeyCode::Enter));
    assert!(m.expanded());
    assert_eq!(m.focus_target(), Focus::Input);
    type_text(&mut m, "task");
    m.update(key(KeyCode::Enter));
    assert_eq!(m.list().len(), 1);
    m.update(key(KeyCode::Esc));
    assert!(!m.expanded());
}

#[test]
fn test_island_lists_incomplete_first() {
    let mut m = new(Variant::Island);
    m.add("first");
    m.add("second");
    let id = m.list().items()[0].id.clone();
    m.toggle(&id);
    m.expand();
    let texts: Vec<&str> = m.visible().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["second", "first"]);
    assert_eq!(m.list().items()[0].text, "first");
}

#[test]
fn test_help_footer_reflects_variant() {
    let dynamic = plain(&new(Variant::Dynamic));
    assert!(dynamic.contains("hide/show done"));
    let island = plain(&new(Variant::Island));
    assert!(island.contains("open"));
    assert!(!island.contains("toggle"));
}

#[test]
fn test_ctrl_c_quits() {
    let mut m = new(Variant::Simple);
    let cmd = m.update(Box::new(KeyMsg {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    }));
    assert!(cmd.is_some());
    assert!(m.update(key(KeyCode::Char('c'))).is_none());
}
