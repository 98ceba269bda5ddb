use super::entities::ListEntry;

/// What a resolved form submission should do to the collection.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction<F> {
    Add(F),
    Update { id: String, fields: F },
}

/// Add-vs-edit state for one screen's input form.
///
/// At most one entry is pending at a time. Edit mode is one-shot: after
/// resolving a submit the caller clears the session unconditionally, whether
/// the submission became an add or an update.
#[derive(Clone, Debug)]
pub struct EditSession<T> {
    pending: Option<T>,
}

impl<T> Default for EditSession<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: ListEntry> EditSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters edit mode targeting `entry`; its current fields back the form.
    pub fn begin(&mut self, entry: T) {
        self.pending = Some(entry);
    }

    /// Returns to add mode.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_editing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Resolves validated form fields into the action the store should run.
    pub fn resolve_submit<F>(&self, fields: F) -> SubmitAction<F> {
        match &self.pending {
            Some(entry) => SubmitAction::Update {
                id: entry.id().to_string(),
                fields,
            },
            None => SubmitAction::Add(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Destination;

    fn stop(id: &str, name: &str) -> Destination {
        Destination {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn starts_in_add_mode() {
        let session = EditSession::<Destination>::new();
        assert!(!session.is_editing());
        assert_eq!(session.resolve_submit("Rome"), SubmitAction::Add("Rome"));
    }

    #[test]
    fn begin_switches_submit_to_update() {
        let mut session = EditSession::new();
        session.begin(stop("d-1", "Rome"));
        assert!(session.is_editing());
        assert_eq!(session.pending().map(|d| d.name.as_str()), Some("Rome"));
        assert_eq!(
            session.resolve_submit("Florence"),
            SubmitAction::Update {
                id: "d-1".to_string(),
                fields: "Florence",
            }
        );
    }

    #[test]
    fn clear_returns_to_add_mode() {
        let mut session = EditSession::new();
        session.begin(stop("d-1", "Rome"));
        session.clear();
        assert!(!session.is_editing());
        assert_eq!(session.resolve_submit("Rome"), SubmitAction::Add("Rome"));
    }
}
