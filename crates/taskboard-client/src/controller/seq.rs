use std::cell::Cell;
use std::rc::Rc;

/// Monotonic request counter. Only the holder of the latest ticket may
/// publish its response; anything older has been superseded.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: Rc<Cell<u64>>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> Ticket {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        Ticket { id, latest: Rc::clone(&self.latest) }
    }

    /// Supersede every ticket handed out so far without starting a request
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

#[derive(Debug)]
pub struct Ticket {
    id: u64,
    latest: Rc<Cell<u64>>,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.get() == self.id
    }
}
