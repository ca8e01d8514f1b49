/// Ties a stroke to the pointer that started it.
///
/// Only a primary pointer may start drawing, and while it is down every event
/// from other pointers is ignored. A second finger therefore never opens a
/// stroke, feeds points into the first finger's stroke, or ends it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerGate {
    active: Option<i32>,
}

impl PointerGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<i32> {
        self.active
    }

    pub fn begin(&mut self, pointer_id: i32, is_primary: bool) -> bool {
        if !is_primary {
            return false;
        }
        if self.active.is_some_and(|active| active != pointer_id) {
            return false;
        }
        self.active = Some(pointer_id);
        true
    }

    pub fn accepts(&self, pointer_id: i32) -> bool {
        self.active == Some(pointer_id)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if !self.accepts(pointer_id) {
            return false;
        }
        self.active = None;
        true
    }
}
