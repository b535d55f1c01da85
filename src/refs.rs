use pdf_writer::Ref;
use std::collections::HashMap;

/// The indirect objects making up a single-page overlay document
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page,
    Content,
    Font,
    CidFont,
    FontDescriptor,
    FontData,
    ToUnicode,
}

pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Returns the reference for `ref_type`, allocating it on first use
    pub fn alloc(&mut self, ref_type: RefType) -> Ref {
        if let Some(id) = self.get(ref_type) {
            return id;
        }
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }
}
