use crate::domain::{validate, EditSession, PackingItem, SubmitAction, ValidationError};
use crate::infra::store::ListStore;
use crate::util::persistence::Storage;

const PACKING_KEY: &str = "packingList";

/// Packing checklist for a trip, optionally tied to the destination city the
/// navigation boundary handed over.
pub struct PackingScreen {
    city: Option<String>,
    store: ListStore<PackingItem>,
    session: EditSession<PackingItem>,
}

impl PackingScreen {
    pub fn load(storage: Storage, city: Option<String>) -> Self {
        Self {
            city,
            store: ListStore::open(storage, PACKING_KEY),
            session: EditSession::new(),
        }
    }

    /// City for the screen title, if the user entered one.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn items(&self) -> &[PackingItem] {
        self.store.entries()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn editing(&self) -> Option<&PackingItem> {
        self.session.pending()
    }

    /// Adds a new unpacked item, or renames the one being edited. A rename
    /// never touches the packed flag.
    pub fn submit(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = validate::entry_name(name)?;
        match self.session.resolve_submit(name) {
            SubmitAction::Add(name) => {
                self.store.add(PackingItem::draft(name));
            }
            SubmitAction::Update { id, fields: name } => {
                self.store.update(&id, |item| item.name = name);
            }
        }
        self.session.clear();
        Ok(())
    }

    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.store.get(id) {
            Some(item) => {
                self.session.begin(item.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.session.clear();
    }

    pub fn toggle_packed(&mut self, id: &str) {
        self.store.update(id, |item| item.packed = !item.packed);
    }

    pub fn delete(&mut self, id: &str) {
        self.store.delete(id);
    }
}
