use std::cell::RefCell;
use std::rc::Rc;

use chart_cursor::core::{PlotFrame, Point, Size};
use chart_cursor::extensions::{CursorContext, CursorEvent, CursorListener};
use chart_cursor::{ChartError, CursorBehavior, CursorConfig, XyCursor};

type Log = Rc<RefCell<Vec<(String, CursorEvent, CursorContext)>>>;

struct LoggingListener {
    id: String,
    log: Log,
}

impl LoggingListener {
    fn boxed(id: &str, log: &Log) -> Box<dyn CursorListener> {
        Box::new(Self {
            id: id.to_owned(),
            log: Rc::clone(log),
        })
    }
}

impl CursorListener for LoggingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: CursorEvent, context: CursorContext) {
        self.log.borrow_mut().push((self.id.clone(), event, context));
    }
}

fn cursor(behavior: CursorBehavior) -> XyCursor {
    let frame = PlotFrame::new(Point::ORIGIN, Size::new(200.0, 100.0));
    XyCursor::new(CursorConfig::new(behavior), 1, frame).expect("valid cursor")
}

#[test]
fn duplicate_and_empty_ids_are_rejected() {
    let log = Log::default();
    let mut cursor = cursor(CursorBehavior::ZoomX);
    cursor
        .register_listener(LoggingListener::boxed("a", &log))
        .expect("first registration");

    let duplicate = cursor.register_listener(LoggingListener::boxed("a", &log));
    assert!(matches!(
        duplicate,
        Err(ChartError::DuplicateListener { ref id }) if id == "a"
    ));
    let empty = cursor.register_listener(LoggingListener::boxed("", &log));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));
    assert_eq!(cursor.listener_count(), 1);
}

#[test]
fn unregister_stops_delivery() {
    let log = Log::default();
    let mut cursor = cursor(CursorBehavior::ZoomX);
    cursor
        .register_listener(LoggingListener::boxed("a", &log))
        .expect("register");
    assert!(cursor.has_listener("a"));
    assert!(cursor.unregister_listener("a"));
    assert!(!cursor.unregister_listener("a"));

    cursor.trigger_move(Point::new(50.0, 50.0), None, false);
    assert!(log.borrow().is_empty());
}

#[test]
fn listeners_run_in_registration_order() {
    let log = Log::default();
    let mut cursor = cursor(CursorBehavior::ZoomX);
    for id in ["first", "second"] {
        cursor
            .register_listener(LoggingListener::boxed(id, &log))
            .expect("register");
    }
    cursor.trigger_move(Point::new(50.0, 50.0), None, false);

    let ids: Vec<String> = log.borrow().iter().map(|(id, _, _)| id.clone()).collect();
    assert_eq!(ids, ["first", "second"]);
}

#[test]
fn context_reflects_the_state_at_emission() {
    let log = Log::default();
    let mut cursor = cursor(CursorBehavior::SelectXY);
    cursor
        .register_listener(LoggingListener::boxed("a", &log))
        .expect("register");
    cursor.trigger_move(Point::new(20.0, 20.0), None, false);
    let _ = cursor.trigger_down(Point::new(20.0, 20.0));
    cursor.trigger_move(Point::new(120.0, 70.0), None, false);
    let _ = cursor.trigger_up(Point::new(120.0, 70.0));

    let log = log.borrow();
    let (_, started, started_context) = log
        .iter()
        .find(|(_, event, _)| *event == CursorEvent::SelectStarted)
        .cloned()
        .expect("select started");
    assert_eq!(started, CursorEvent::SelectStarted);
    assert_eq!(started_context.down_point, Some(Point::new(20.0, 20.0)));
    assert!(started_context.visible);

    let (_, ended, ended_context) = log.last().cloned().expect("an event");
    assert_eq!(ended.name(), "selectended");
    assert_eq!(ended_context.down_point, Some(Point::new(20.0, 20.0)));
    assert_eq!(ended_context.x_range, ended.ranges().map(|(x, _)| x));
    assert_eq!(ended_context.behavior, CursorBehavior::SelectXY);
}

#[test]
fn dispose_drops_listeners() {
    let log = Log::default();
    let mut cursor = cursor(CursorBehavior::ZoomX);
    cursor
        .register_listener(LoggingListener::boxed("a", &log))
        .expect("register");
    cursor.dispose();
    assert_eq!(cursor.listener_count(), 0);
}

#[test]
fn events_serialize_with_a_type_tag() {
    let event = CursorEvent::ZoomEnded {
        x_range: chart_cursor::core::Range::new(0.1, 0.4),
        y_range: chart_cursor::core::Range::FULL,
    };
    let json = serde_json::to_value(event).expect("serialize");
    assert_eq!(json["type"], "zoom_ended");
    assert_eq!(json["x_range"]["start"], 0.1);

    let parsed: CursorEvent =
        serde_json::from_str(r#"{"type":"behavior_canceled"}"#).expect("deserialize");
    assert_eq!(parsed, CursorEvent::BehaviorCanceled);
}
