use std::fs::File;
use std::time::{Duration, Instant};

use fastbar::{
    BarSurface, FastBarConfig, FastScrollBar, IndicatorStyle, ListView, ListWindow, PointerEvent,
    ScrollActivity, ScrollTarget, SectionLabels,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// A contact list the bar is linked to. Stands in for a real list widget:
/// `scroll_to_index` just moves the visible window.
struct ContactList {
    names: Vec<String>,
    viewport_height: u16,
    item_height: u16,
    last_fully_visible: usize,
}

impl ContactList {
    fn new(names: Vec<String>) -> Self {
        let rows_visible = 10;
        Self {
            names,
            viewport_height: 100,
            item_height: 10,
            last_fully_visible: rows_visible - 1,
        }
    }
}

impl ListView for ContactList {
    fn item_count(&self) -> usize {
        self.names.len()
    }

    fn scroll_to_index(&mut self, index: usize) {
        let rows_visible = (self.viewport_height / self.item_height) as usize;
        let max_last = self.names.len().saturating_sub(1);
        self.last_fully_visible = (index + rows_visible - 1).min(max_last);
    }

    fn window(&self) -> ListWindow {
        ListWindow {
            item_count: self.names.len(),
            items_per_row: 1,
            first_visible_item_height: self.item_height,
            viewport_height: self.viewport_height,
            last_fully_visible: Some(self.last_fully_visible),
        }
    }

    fn section_labels(&self) -> Option<&dyn SectionLabels> {
        Some(self)
    }
}

impl SectionLabels for ContactList {
    fn label_for_index(&self, index: usize) -> String {
        self.names.get(index).cloned().unwrap_or_default()
    }
}

/// Prints every visual update instead of drawing.
#[derive(Default)]
struct ConsoleSurface;

impl BarSurface for ConsoleSurface {
    fn set_handle_offset(&mut self, offset: u16) {
        println!("  handle -> {offset}");
    }

    fn slide_in(&mut self) {
        println!("  bar slides in");
    }

    fn slide_out(&mut self) {
        println!("  bar slides out");
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        println!("  indicator {}", if visible { "shown" } else { "hidden" });
    }

    fn set_indicator_text(&mut self, text: &str) {
        println!("  indicator reads {text:?}");
    }
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("contacts.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let names: Vec<String> = ('a'..='z')
        .flat_map(|c| (0..4).map(move |i| format!("{c}-contact-{i}")))
        .collect();
    let mut list = ContactList::new(names);

    let mut bar = FastScrollBar::new(FastBarConfig {
        hide_delay: Duration::from_millis(500),
        ..Default::default()
    });
    bar.set_geometry(list.viewport_height, 20);
    bar.add_scroll_listener(|target| match target {
        ScrollTarget::Index(i) => println!("  listener: scrolled to {i}"),
        ScrollTarget::End => println!("  listener: drag ended"),
    });
    bar.attach_indicator(IndicatorStyle::Alphabet, &list)
        .expect("contact list exposes labels");

    let mut surface = ConsoleSurface;
    let start = Instant::now();

    println!("content drag reveals the bar:");
    bar.on_scroll_activity(ScrollActivity::Dragging, &list, &mut surface, start);
    bar.on_list_scrolled(&list, &mut surface);

    println!("dragging the handle down the track:");
    let mut now = start;
    bar.on_pointer(PointerEvent::Down { x: 0, y: 0 }, &mut list, &mut surface, now);
    for y in [20, 40, 60, 80] {
        now += Duration::from_millis(16);
        bar.on_pointer(PointerEvent::Move { x: 0, y }, &mut list, &mut surface, now);
        bar.on_list_scrolled(&list, &mut surface);
    }

    println!("release:");
    now += Duration::from_millis(16);
    bar.on_pointer(PointerEvent::Up, &mut list, &mut surface, now);

    println!("idle timeout:");
    if let Some(deadline) = bar.next_deadline() {
        bar.poll(&mut surface, deadline);
    }

    Ok(())
}
