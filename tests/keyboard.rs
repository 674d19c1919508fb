//! End-to-end tests for the keyboard facade against fake collaborators

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use canvaskeys::{
    parse_keyboard_yaml, Action, FocusSurface, Handler, KeyEvent, Keyboard, KeyboardOptions,
    Matcher, Shortcut,
};

/// Matcher double that stores handlers and can fire them like a real
/// engine delivering a matched combination.
#[derive(Default)]
struct DispatchMatcher {
    handlers: Rc<RefCell<HashMap<(String, Option<Action>), Handler>>>,
}

impl DispatchMatcher {
    fn handle(&self) -> Rc<RefCell<HashMap<(String, Option<Action>), Handler>>> {
        Rc::clone(&self.handlers)
    }
}

impl Matcher for DispatchMatcher {
    fn bind(&mut self, combinations: &[String], callback: Handler, action: Option<Action>) {
        let mut handlers = self.handlers.borrow_mut();
        let mut rest = combinations.iter();
        if let Some(first) = rest.next() {
            for combination in rest {
                // One live handler per combination; alternates get a no-op
                // stand-in since the callback is singly owned.
                handlers.insert((combination.clone(), action), Box::new(|_| {}));
            }
            handlers.insert((first.clone(), action), callback);
        }
    }

    fn unbind(&mut self, combinations: &[String], action: Option<Action>) {
        let mut handlers = self.handlers.borrow_mut();
        for combination in combinations {
            handlers.remove(&(combination.clone(), action));
        }
    }
}

fn fire(
    handlers: &Rc<RefCell<HashMap<(String, Option<Action>), Handler>>>,
    combination: &str,
    action: Option<Action>,
) -> bool {
    let mut handlers = handlers.borrow_mut();
    match handlers.get_mut(&(combination.to_string(), action)) {
        Some(handler) => {
            let event = KeyEvent::new(combination, action.unwrap_or(Action::Keydown));
            handler(&event);
            true
        }
        None => false,
    }
}

/// Surface double modeling the container attributes the facade mutates.
#[derive(Default, Clone)]
struct CanvasState {
    focus_attr: Rc<RefCell<bool>>,
}

struct FakeCanvas {
    state: CanvasState,
}

impl FocusSurface for FakeCanvas {
    fn accepts_focus(&self) -> bool {
        true
    }

    fn capture_focus(&mut self) {
        *self.state.focus_attr.borrow_mut() = true;
    }

    fn release_focus(&mut self) {
        *self.state.focus_attr.borrow_mut() = false;
    }
}

fn new_keyboard(
    options: KeyboardOptions,
) -> (
    Keyboard,
    Rc<RefCell<HashMap<(String, Option<Action>), Handler>>>,
    CanvasState,
) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();

    let matcher = DispatchMatcher::default();
    let handlers = matcher.handle();
    let state = CanvasState::default();
    let canvas = FakeCanvas {
        state: state.clone(),
    };
    let keyboard = Keyboard::new(options, Box::new(canvas), Box::new(matcher));
    (keyboard, handlers, state)
}

#[test]
fn bound_callback_fires_on_normalized_combination() {
    let (mut keyboard, handlers, _) = new_keyboard(KeyboardOptions::default());

    let hits = Rc::new(RefCell::new(0u32));
    let hits_in_callback = Rc::clone(&hits);
    keyboard.bind(
        "Cmd + Delete",
        Box::new(move |_| *hits_in_callback.borrow_mut() += 1),
        None,
    );

    // Registered under the formatted name, not the raw one.
    assert!(!fire(&handlers, "cmd+delete", None));
    assert!(fire(&handlers, "command+del", None));
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn unbind_removes_the_same_normalized_registration() {
    let (mut keyboard, handlers, _) = new_keyboard(KeyboardOptions::default());

    keyboard.bind("Ctrl+Z", Box::new(|_| {}), Some(Action::Keydown));
    assert!(fire(&handlers, "ctrl+z", Some(Action::Keydown)));

    keyboard.unbind("Ctrl+Z", Some(Action::Keydown));
    assert!(!fire(&handlers, "ctrl+z", Some(Action::Keydown)));
}

#[test]
fn callback_receives_matched_combination_and_action() {
    let (mut keyboard, handlers, _) = new_keyboard(KeyboardOptions::default());

    let seen = Rc::new(RefCell::new(None));
    let seen_in_callback = Rc::clone(&seen);
    keyboard.bind(
        "escape",
        Box::new(move |event| *seen_in_callback.borrow_mut() = Some(event.clone())),
        Some(Action::Keyup),
    );

    fire(&handlers, "escape", Some(Action::Keyup));
    let event = seen.borrow().clone().unwrap();
    assert_eq!(event.combination, "escape");
    assert_eq!(event.action, Action::Keyup);
}

#[test]
fn enable_disable_toggle_the_focus_attribute() {
    let (mut keyboard, _, state) = new_keyboard(KeyboardOptions::default());
    assert!(!*state.focus_attr.borrow());

    keyboard.enable(false);
    assert!(keyboard.is_enabled());
    assert!(*state.focus_attr.borrow());

    keyboard.disable();
    assert!(keyboard.is_disabled());
    assert!(!*state.focus_attr.borrow());
}

#[test]
fn construction_with_enabled_options_captures_focus() {
    let (keyboard, _, state) = new_keyboard(KeyboardOptions::enabled());
    assert!(keyboard.is_enabled());
    assert!(*state.focus_attr.borrow());
}

#[test]
fn declared_shortcuts_from_yaml_bind_with_attached_callbacks() {
    let yaml = r#"
enabled: true
shortcuts:
  - keys: "Cmd+Z"
    action: keydown
  - keys: ["Delete", "Backspace"]
"#;

    let file = parse_keyboard_yaml(yaml).unwrap();
    let options = if file.enabled {
        KeyboardOptions::enabled()
    } else {
        KeyboardOptions::disabled()
    };
    let (mut keyboard, handlers, _) = new_keyboard(options);

    let hits = Rc::new(RefCell::new(0u32));
    for decl in &file.shortcuts {
        let hits_in_callback = Rc::clone(&hits);
        keyboard.bind(
            decl.keys.clone(),
            Box::new(move |_| *hits_in_callback.borrow_mut() += 1),
            decl.action,
        );
    }

    assert!(fire(&handlers, "command+z", Some(Action::Keydown)));
    assert!(fire(&handlers, "del", None));
    assert_eq!(*hits.borrow(), 2);
}

#[test]
fn init_shortcuts_registers_constructed_entries() {
    let options = KeyboardOptions::disabled().with_shortcuts(vec![
        Shortcut::new("ctrl+c", Box::new(|_| {})),
        Shortcut::new("ctrl+v", Box::new(|_| {})).on(Action::Keydown),
    ]);
    let (mut keyboard, handlers, _) = new_keyboard(options);

    keyboard.init_shortcuts();
    assert!(fire(&handlers, "ctrl+c", None));
    assert!(fire(&handlers, "ctrl+v", Some(Action::Keydown)));
}
