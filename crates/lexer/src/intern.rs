use std::rc::Rc;

use rustc_hash::FxHashSet;

/// Deduplicating identifier pool.
///
/// `intern` hands out pointer-stable handles: every token with the same
/// spelling shares one allocation for the pool's lifetime. The pool grows
/// monotonically; entries are never evicted.
#[derive(Debug, Default)]
pub struct IdentifierPool {
    entries: FxHashSet<Rc<str>>,
}

impl IdentifierPool {
    pub fn intern(&mut self, spelling: &str) -> Rc<str> {
        if let Some(entry) = self.entries.get(spelling) {
            return Rc::clone(entry);
        }
        let entry: Rc<str> = Rc::from(spelling);
        self.entries.insert(Rc::clone(&entry));
        entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
