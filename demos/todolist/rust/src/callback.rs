// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;

type Handler<Arguments> = Rc<dyn Fn(&Arguments)>;

/// A single-slot event a controller emits towards whoever connected to it.
///
/// Connecting again replaces the previous handler. Invoking an unconnected
/// callback does nothing.
pub struct Callback<Arguments: ?Sized> {
    handler: RefCell<Option<Handler<Arguments>>>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handler: RefCell::new(None) }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, f: impl Fn(&Arguments) + 'static) {
        *self.handler.borrow_mut() = Some(Rc::new(f));
    }

    pub fn invoke(&self, arguments: &Arguments) {
        // the handler may reconnect or drop this callback's owner while running
        let handler = self.handler.borrow().clone();

        if let Some(handler) = handler {
            handler(arguments);
        }
    }
}
