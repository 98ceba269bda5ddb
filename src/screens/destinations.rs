use crate::domain::{validate, Destination, EditSession, SubmitAction, ValidationError};
use crate::infra::store::ListStore;
use crate::util::persistence::Storage;

const DESTINATIONS_KEY: &str = "destinations";

/// Multi-destination itinerary: the ordered list of stops for a trip.
pub struct DestinationsScreen {
    store: ListStore<Destination>,
    session: EditSession<Destination>,
}

impl DestinationsScreen {
    pub fn load(storage: Storage) -> Self {
        Self {
            store: ListStore::open(storage, DESTINATIONS_KEY),
            session: EditSession::new(),
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        self.store.entries()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn editing(&self) -> Option<&Destination> {
        self.session.pending()
    }

    /// Adds a new stop, or renames the one being edited.
    pub fn submit(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = validate::entry_name(name)?;
        match self.session.resolve_submit(name) {
            SubmitAction::Add(name) => {
                self.store.add(Destination::draft(name));
            }
            SubmitAction::Update { id, fields: name } => {
                self.store.update(&id, |stop| stop.name = name);
            }
        }
        self.session.clear();
        Ok(())
    }

    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.store.get(id) {
            Some(stop) => {
                self.session.begin(stop.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.session.clear();
    }

    pub fn delete(&mut self, id: &str) {
        self.store.delete(id);
    }
}
