use tracing::warn;

use crate::domain::{
    budget, validate, BudgetSummary, EditSession, Expense, SubmitAction, ValidationError,
};
use crate::infra::store::ListStore;
use crate::util::persistence::Storage;

const EXPENSES_KEY: &str = "expenses";
const TOTAL_KEY: &str = "total";
const BUDGET_KEY: &str = "budget";

/// Budget tracker: an expense collection with a derived spent total and an
/// optional spending limit.
pub struct BudgetScreen {
    store: ListStore<Expense>,
    session: EditSession<Expense>,
    limit: Option<f64>,
    storage: Storage,
}

struct ExpenseFields {
    name: String,
    amount: f64,
}

impl BudgetScreen {
    /// Hydrates expenses and the stored limit. The spent total is not read
    /// back; it is derived from the expense collection.
    pub fn load(storage: Storage) -> Self {
        let store = ListStore::open(storage.clone(), EXPENSES_KEY);
        let limit = read_limit(&storage);
        Self {
            store,
            session: EditSession::new(),
            limit,
            storage,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        self.store.entries()
    }

    pub fn limit(&self) -> Option<f64> {
        self.limit
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    /// The expense currently loaded into the form, if any.
    pub fn editing(&self) -> Option<&Expense> {
        self.session.pending()
    }

    /// Derived numbers for the summary line, recomputed from the full
    /// collection.
    pub fn summary(&self) -> BudgetSummary {
        self.store
            .derive(|expenses| budget::summarize(expenses, self.limit))
    }

    /// Validates the form fields and resolves them into an add or, when an
    /// edit is pending, an in-place update. The session returns to add mode
    /// either way.
    pub fn submit(&mut self, name: &str, amount: &str) -> Result<(), ValidationError> {
        let fields = ExpenseFields {
            name: validate::entry_name(name)?,
            amount: validate::amount(amount)?,
        };
        match self.session.resolve_submit(fields) {
            SubmitAction::Add(fields) => {
                self.store.add(Expense::draft(fields.name, fields.amount));
            }
            SubmitAction::Update { id, fields } => {
                self.store.update(&id, |expense| {
                    expense.name = fields.name;
                    expense.amount = fields.amount;
                });
            }
        }
        self.session.clear();
        self.persist_aggregates();
        Ok(())
    }

    /// Loads the expense with `id` into the form. Returns false for an
    /// unknown id.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.store.get(id) {
            Some(expense) => {
                self.session.begin(expense.clone());
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
        self.persist_aggregates();
    }

    /// Sets or clears the spending limit; blank input clears it.
    pub fn set_limit(&mut self, input: &str) -> Result<(), ValidationError> {
        self.limit = validate::optional_amount(input)?;
        self.persist_aggregates();
        Ok(())
    }

    /// Write-through of the derived total and the limit. `total` exists for
    /// the stored layout only and is recomputed from `expenses` on load.
    fn persist_aggregates(&self) {
        let total = self.store.derive(budget::spent_total);
        write_number(&self.storage, TOTAL_KEY, Some(total));
        write_number(&self.storage, BUDGET_KEY, self.limit);
    }
}

fn read_limit(storage: &Storage) -> Option<f64> {
    match storage.read(BUDGET_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Option<f64>>(&raw) {
            Ok(limit) => limit,
            Err(err) => {
                warn!(key = BUDGET_KEY, %err, "stored limit is corrupt, clearing it");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!(key = BUDGET_KEY, %err, "failed to read stored limit");
            None
        }
    }
}

fn write_number(storage: &Storage, key: &str, value: Option<f64>) {
    match serde_json::to_string(&value) {
        Ok(json) => {
            if let Err(err) = storage.write(key, &json) {
                warn!(key = %key, %err, "failed to persist value");
            }
        }
        Err(err) => warn!(key = %key, %err, "failed to serialize value"),
    }
}
