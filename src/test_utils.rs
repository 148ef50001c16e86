pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::autocomplete::{Autocomplete, AutocompleteProps, Selection};
    use crate::choice::Item;

    pub const DEBOUNCE: Duration = Duration::from_millis(500);

    pub fn fruit_options() -> Vec<Item> {
        vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Cherry"),
            Item::new(4, "Date"),
            Item::new(5, "Elderberry"),
        ]
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    /// Captures everything the widget reports to its host
    #[derive(Clone, Default)]
    pub struct Recorder {
        pub changes: Rc<RefCell<Vec<Selection<Item>>>>,
        pub inputs: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        pub fn last_change(&self) -> Option<Selection<Item>> {
            self.changes.borrow().last().cloned()
        }

        pub fn change_count(&self) -> usize {
            self.changes.borrow().len()
        }

        pub fn inputs(&self) -> Vec<String> {
            self.inputs.borrow().clone()
        }
    }

    pub fn recording_props(options: Vec<Item>) -> (AutocompleteProps<Item>, Recorder) {
        let recorder = Recorder::default();
        let changes = Rc::clone(&recorder.changes);
        let inputs = Rc::clone(&recorder.inputs);

        let props = AutocompleteProps::new(
            options,
            move |selection| changes.borrow_mut().push(selection),
            move |text: &str| inputs.borrow_mut().push(text.to_string()),
        )
        .with_debounce(DEBOUNCE);

        (props, recorder)
    }

    /// Mount with the fruit options and let the initial filter run settle
    pub fn settled_widget(multiple: bool) -> (Autocomplete<Item>, Recorder, Instant) {
        let (props, recorder) = recording_props(fruit_options());
        let t0 = Instant::now();
        let mut widget = Autocomplete::mount(props.multiple(multiple), t0);
        let now = t0 + DEBOUNCE;
        widget.tick(now);
        (widget, recorder, now)
    }

    /// Type `text` one key at a time at `now`
    pub fn type_text(widget: &mut Autocomplete<Item>, text: &str, now: Instant) {
        for c in text.chars() {
            widget.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    pub fn labels(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }
}
