use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use veil::prelude::*;

fn page() -> Document {
    Document::with_children([
        Element::div()
            .id("main")
            .child(Element::button("Settings").id("open-settings")),
        Element::div()
            .id("settings")
            .child(Element::input().id("name"))
            .child(Element::button("Delete account").id("delete"))
            .child(Element::button("Close").id("close-settings")),
        Element::div()
            .id("confirm")
            .child(Element::text("Are you sure?"))
            .child(Element::button("Cancel").id("cancel"))
            .child(Element::button("Delete").id("confirm-delete")),
    ])
    .expect("static page has unique IDs")
}

fn report(step: &str, manager: &mut OverlayManager, doc: &Document) {
    println!("== {step}");
    println!("   focus:    {:?}", doc.active_element());
    println!(
        "   stack:    {:?}",
        manager
            .registry()
            .iter()
            .map(|h| (h.instance.as_str(), h.z_index))
            .collect::<Vec<_>>()
    );
    println!(
        "   backdrop: visible={} z={} phase={:?}",
        manager.backdrop().is_visible(),
        manager.backdrop().z_index(),
        manager.backdrop().phase()
    );
    for event in manager.take_events() {
        println!("   event:    {:?}", event);
    }
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("nested_dialogs.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let frame = Duration::from_millis(16);
    let settle = Duration::from_millis(200);

    let mut doc = page();
    let mut manager = OverlayManager::default();
    let settings = OverlayId::from("settings");
    let confirm = OverlayId::from("confirm");

    manager
        .register(&mut doc, settings.clone(), OverlayOptions::new())
        .expect("settings dialog");
    manager
        .register(
            &mut doc,
            confirm.clone(),
            OverlayOptions::new().focus_on_show(FocusOnShow::Element("cancel".into())),
        )
        .expect("confirm dialog");
    manager.show_backdrop(&mut doc, &settings).expect("settings backdrop");
    manager.show_backdrop(&mut doc, &confirm).expect("confirm backdrop");

    manager.focus(&mut doc, "open-settings").expect("focusable trigger");
    manager.set_open(&mut doc, &settings, true).expect("open settings");
    manager.advance(&mut doc, settle);
    report("settings open", &mut manager, &doc);

    for _ in 0..4 {
        manager.dispatch_key(&mut doc, Key::Tab, Modifiers::new());
        manager.advance(&mut doc, frame);
        println!("   tab ->    {:?}", doc.active_element());
    }

    manager.focus(&mut doc, "delete").expect("focusable button");
    manager.set_open(&mut doc, &confirm, true).expect("open confirm");
    manager.advance(&mut doc, settle);
    report("confirm open", &mut manager, &doc);

    manager.dispatch_key(&mut doc, Key::BackTab, Modifiers::new());
    report("shift+tab in confirm", &mut manager, &doc);

    manager.set_open(&mut doc, &confirm, false).expect("close confirm");
    manager.advance(&mut doc, settle);
    report("confirm closed", &mut manager, &doc);

    manager.set_open(&mut doc, &settings, false).expect("close settings");
    manager.advance(&mut doc, settle);
    report("settings closed", &mut manager, &doc);

    Ok(())
}
