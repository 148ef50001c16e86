mod autocomplete_events;
mod autocomplete_render;
mod autocomplete_state;
mod debouncer;
pub mod filter;
mod navigation;
mod props;
mod selection;

pub use autocomplete_render::render_autocomplete;
pub use autocomplete_state::Autocomplete;
pub use debouncer::DEFAULT_DEBOUNCE;
pub use filter::FilterFn;
pub use navigation::HighlightCursor;
pub use props::{
    AutocompleteProps, ChangeFn, DEFAULT_MAX_VISIBLE, InputChangeFn, MAX_VISIBLE_LIMIT, RenderFn,
};
pub use selection::{SelectedSet, Selection};
