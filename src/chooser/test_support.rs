use std::{
    cell::RefCell,
    rc::Rc,
};

use super::collaborators::{
    BusyIndicator,
    Reveal,
};
use crate::form::FieldHandle;

/// Records `true` for every show and `false` for every hide.
#[derive(Clone, Default)]
pub struct RevealProbe(Rc<RefCell<Vec<bool>>>);

impl RevealProbe {
    pub fn events(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }
}

impl Reveal for RevealProbe {
    fn show(&mut self) {
        self.0.borrow_mut().push(true);
    }

    fn hide(&mut self) {
        self.0.borrow_mut().push(false);
    }
}

#[derive(Clone, Default)]
pub struct IndicatorProbe(Rc<RefCell<Vec<String>>>);

impl IndicatorProbe {
    pub fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl BusyIndicator for IndicatorProbe {
    fn busy(&mut self, field: &FieldHandle, _spinner: &str) {
        self.0.borrow_mut().push(format!("busy {}", field.name));
    }

    fn idle(&mut self, field: &FieldHandle) {
        self.0.borrow_mut().push(format!("idle {}", field.name));
    }
}
