// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode switching, listener hygiene and shared selection.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use vitrine_gallery::{Gallery, GalleryConfig, ViewMode};
use vitrine_gesture::drag::ClickDisposition;
use vitrine_gesture::listeners::{EventKinds, ListenTarget, ListenerHost};
use vitrine_project::{Catalog, Language, ProjectId, ProjectRecord, ProjectTranslation};

#[derive(Default)]
struct RecordingHost {
    live: RefCell<Vec<(u32, ListenTarget, EventKinds)>>,
    next: RefCell<u32>,
}

impl RecordingHost {
    fn live(&self) -> usize {
        self.live.borrow().len()
    }

    fn has(&self, target: ListenTarget, kind: EventKinds) -> bool {
        self.live
            .borrow()
            .iter()
            .any(|&(_, t, k)| t == target && k == kind)
    }
}

impl ListenerHost for RecordingHost {
    type Handle = u32;

    fn attach(&self, target: ListenTarget, kind: EventKinds) -> u32 {
        let mut next = self.next.borrow_mut();
        *next += 1;
        self.live.borrow_mut().push((*next, target, kind));
        *next
    }

    fn detach(&self, handle: u32) {
        self.live.borrow_mut().retain(|(h, _, _)| *h != handle);
    }
}

#[derive(Default)]
struct Panel {
    shown: Vec<ProjectId>,
}

impl vitrine_selection::DetailPanel for Panel {
    fn scroll_into_view(&mut self, id: &ProjectId) {
        self.shown.push(id.clone());
    }
}

fn projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("p1", "Atlas", "Aug 2025 \u{2013} Oct 2025"),
        ProjectRecord::new("p2", "Beacon", "Mar 2025 \u{2013} Jun 2025"),
        ProjectRecord::new("p3", "Cinder", "Nov 2024 \u{2013} Feb 2025"),
        ProjectRecord::new("p4", "Drift", "Jan 2024 \u{2013} Jul 2024"),
    ]
}

fn gallery(width: f64) -> (Rc<RecordingHost>, Gallery<RecordingHost>) {
    let host = Rc::new(RecordingHost::default());
    let mut gallery = Gallery::new(GalleryConfig::default(), Rc::clone(&host), width);
    gallery.set_projects(projects(), 0.0);
    (host, gallery)
}

#[test]
fn listeners_follow_the_active_view() {
    let (host, mut gallery) = gallery(1440.0);
    assert_eq!(host.live(), 0, "nothing attached before mount");

    gallery.mount(0.0);
    assert_eq!(host.live(), 3);
    assert!(host.has(ListenTarget::Window, EventKinds::POINTER_MOVE));
    assert!(host.has(ListenTarget::Window, EventKinds::POINTER_UP));
    assert!(host.has(ListenTarget::Window, EventKinds::RESIZE));

    assert!(gallery.set_mode(ViewMode::Timeline, 10.0));
    assert_eq!(host.live(), 5);
    assert!(host.has(ListenTarget::Container, EventKinds::WHEEL));
    assert!(host.has(ListenTarget::Container, EventKinds::SCROLL));
    assert!(!host.has(ListenTarget::Window, EventKinds::POINTER_MOVE));

    gallery.unmount();
    assert_eq!(host.live(), 0);
}

#[test]
fn toggling_many_times_never_leaks() {
    let (host, mut gallery) = gallery(1440.0);
    gallery.mount(0.0);
    for i in 0..100 {
        let now = f64::from(i) * 16.0;
        gallery.set_mode(gallery.mode().toggle(), now);
        assert!(host.live() <= 5);
        assert_eq!(host.live(), gallery.listener_count());
    }
    gallery.unmount();
    assert_eq!(host.live(), 0);
}

#[test]
fn same_mode_is_a_no_op() {
    let (host, mut gallery) = gallery(1440.0);
    gallery.mount(0.0);
    assert!(!gallery.set_mode(ViewMode::Scatter, 5.0));
    assert_eq!(host.live(), 3);
}

#[test]
fn switching_unmounted_does_not_attach() {
    let (host, mut gallery) = gallery(1440.0);
    gallery.set_mode(ViewMode::Timeline, 0.0);
    assert_eq!(host.live(), 0);
    assert!(!gallery.timeline().is_animating());
}

#[test]
fn drag_interrupted_by_mode_switch_is_abandoned() {
    let (_host, mut gallery) = gallery(1440.0);
    gallery.mount(0.0);
    let p1 = ProjectId::from("p1");
    gallery.pointer_down(Some(&p1), Point::ZERO);
    gallery.pointer_move(Point::new(30.0, 0.0));

    gallery.set_mode(ViewMode::Timeline, 100.0);
    gallery.set_mode(ViewMode::Scatter, 200.0);

    // The gesture is gone: moves do nothing and the next click selects.
    assert!(!gallery.pointer_move(Point::new(90.0, 0.0)));
    assert_eq!(gallery.scatter().offsets().get(&p1), Vec2::new(30.0, 0.0));
    assert_eq!(gallery.click(&p1), ClickDisposition::Activate);
    assert_eq!(gallery.selection().selected(), Some(&p1));
}

#[test]
fn scatter_reopens_after_switching_back() {
    let (_host, mut gallery) = gallery(1440.0);
    let mut panel = Panel::default();
    gallery.mount(0.0);
    assert!(gallery.frame(180.0, &mut panel).scatter_changed);
    assert!(gallery.scatter().is_open());

    gallery.set_mode(ViewMode::Timeline, 200.0);
    gallery.set_mode(ViewMode::Scatter, 300.0);
    assert!(!gallery.scatter().is_open());
    assert!(!gallery.frame(400.0, &mut panel).scatter_changed);
    assert!(gallery.frame(480.0, &mut panel).scatter_changed);
}

#[test]
fn drag_release_does_not_select_but_tap_does() {
    let (_host, mut gallery) = gallery(1440.0);
    let mut panel = Panel::default();
    gallery.mount(0.0);
    let p1 = ProjectId::from("p1");

    gallery.pointer_down(Some(&p1), Point::ZERO);
    gallery.pointer_move(Point::new(10.0, 10.0));
    gallery.pointer_up();
    assert_eq!(gallery.click(&p1), ClickDisposition::Suppressed);
    assert!(!gallery.frame(16.0, &mut panel).revealed);
    assert_eq!(gallery.selected_project(), None);

    gallery.pointer_down(Some(&p1), Point::ZERO);
    gallery.pointer_up();
    assert_eq!(gallery.click(&p1), ClickDisposition::Activate);
    assert!(gallery.frame(32.0, &mut panel).revealed);
    assert_eq!(panel.shown, [p1.clone()]);
    assert_eq!(gallery.selected_project().map(|p| p.name.as_str()), Some("Atlas"));
}

#[test]
fn timeline_input_stops_the_reveal() {
    let (_host, mut gallery) = gallery(1440.0);
    let mut panel = Panel::default();
    gallery.set_mode(ViewMode::Timeline, 0.0);
    gallery.mount(0.0);
    assert!(gallery.timeline().is_animating());
    assert!(gallery.frame(16.0, &mut panel).scroll_to.is_some());

    assert!(gallery.wheel());
    assert_eq!(gallery.frame(32.0, &mut panel).scroll_to, None);
    assert!(!gallery.wheel(), "already stopped");
}

#[test]
fn timeline_click_selects_directly() {
    let (_host, mut gallery) = gallery(1440.0);
    gallery.set_mode(ViewMode::Timeline, 0.0);
    gallery.mount(0.0);
    let p3 = ProjectId::from("p3");
    gallery.pointer_down(Some(&p3), Point::ZERO);
    assert!(!gallery.timeline().is_animating());
    assert_eq!(gallery.click(&p3), ClickDisposition::Activate);
    assert_eq!(gallery.selection().selected(), Some(&p3));
}

#[test]
fn language_switch_keeps_ids_and_selection() {
    let mut catalog = Catalog::new(Language::English, projects());
    catalog.insert_translation(
        Language::Chinese,
        "p2",
        ProjectTranslation {
            name: Some("\u{706f}\u{5854}".into()),
            ..ProjectTranslation::default()
        },
    );

    let (_host, mut gallery) = gallery(1440.0);
    gallery.set_language(&catalog, Language::English, 0.0);
    gallery.mount(0.0);
    let p2 = ProjectId::from("p2");
    gallery.click(&p2);

    gallery.set_language(&catalog, Language::Chinese, 100.0);
    assert_eq!(gallery.language(), Some(Language::Chinese));
    assert_eq!(gallery.selection().selected(), Some(&p2));
    assert_eq!(
        gallery.selected_project().map(|p| p.name.as_str()),
        Some("\u{706f}\u{5854}")
    );
}

#[test]
fn replacing_the_list_invalidates_a_missing_selection() {
    let (_host, mut gallery) = gallery(1440.0);
    gallery.mount(0.0);
    let p4 = ProjectId::from("p4");
    gallery.click(&p4);
    assert!(gallery.selected_project().is_some());

    let mut fewer = projects();
    fewer.retain(|p| p.id != p4);
    gallery.set_projects(fewer, 50.0);
    assert_eq!(gallery.selection().selected(), None);
    assert_eq!(gallery.selected_project(), None);

    let mut panel = Panel::default();
    assert!(!gallery.frame(66.0, &mut panel).revealed);
}

#[test]
fn empty_gallery_renders_nothing() {
    let host = Rc::new(RecordingHost::default());
    let mut gallery = Gallery::new(GalleryConfig::default(), host, 1440.0);
    gallery.mount(0.0);
    assert!(gallery.scatter_cards().is_empty());
    gallery.set_mode(ViewMode::Timeline, 0.0);
    assert!(gallery.timeline_frame().cards.is_empty());
    assert_eq!(gallery.click(&ProjectId::from("ghost")), ClickDisposition::Suppressed);
    assert_eq!(gallery.selected_project(), None);
}

#[test]
fn resize_reaches_both_views() {
    let (_host, mut gallery) = gallery(1440.0);
    gallery.resize(500.0);
    assert_eq!(gallery.scatter().scale(), 0.7);
    assert_eq!(gallery.timeline().scale(), 0.7);
    assert_eq!(gallery.timeline().viewport_width(), 500.0);
}
