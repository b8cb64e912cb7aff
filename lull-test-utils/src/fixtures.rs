// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A text input a debounced search handler is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub id: u32,
    pub label: String,
}

impl SearchBox {
    #[must_use]
    pub const fn new(id: u32, label: String) -> Self {
        Self { id, label }
    }
}

/// Window geometry reported by a resize event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub width: u32,
    pub height: u32,
}

pub fn search_box_header() -> SearchBox {
    SearchBox::new(1, "header".to_string())
}

pub fn search_box_sidebar() -> SearchBox {
    SearchBox::new(2, "sidebar".to_string())
}

pub fn query(text: &str) -> String {
    text.to_string()
}

pub const fn resize(width: u32, height: u32) -> Resize {
    Resize { width, height }
}
