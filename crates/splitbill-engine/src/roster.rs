//! Group roster: the ordered participant collection a bill is split over.
//!
//! The roster owns the caller-side flows that feed [`settle`]: adding and
//! renaming people with name validation, entering per-person amounts,
//! deriving equal shares, and the single-payer shortcut. Insertion order
//! is preserved throughout — it is what makes the engine's output stable.

use rust_decimal::Decimal;
use splitbill_types::money::round_cents;
use splitbill_types::{Participant, ParticipantId, Result, Settlement, SplitError};

use crate::netting::settle;

/// Ordered collection of participants for one bill.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    /// The participants in insertion order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Add a participant with zero expense and payment.
    ///
    /// The name is trimmed and must be non-empty and unique within the
    /// roster.
    ///
    /// # Errors
    /// - `EmptyParticipantName` if the trimmed name is empty
    /// - `DuplicateParticipantName` if another participant has this name
    pub fn add(&mut self, name: &str) -> Result<ParticipantId> {
        let name = Self::validated_name(name, &self.participants, None)?;
        let participant = Participant::new(name, Decimal::ZERO, Decimal::ZERO);
        let id = participant.id;
        self.participants.push(participant);
        Ok(id)
    }

    /// Rename a participant, with the same validation as [`Roster::add`].
    ///
    /// # Errors
    /// Additionally `ParticipantNotFound` for an unknown id.
    pub fn rename(&mut self, id: ParticipantId, name: &str) -> Result<()> {
        let name = Self::validated_name(name, &self.participants, Some(id))?;
        self.get_mut(id)?.name = name;
        Ok(())
    }

    /// Remove a participant. Unknown ids are ignored; the order of the
    /// remaining participants is preserved.
    pub fn remove(&mut self, id: ParticipantId) {
        self.participants.retain(|p| p.id != id);
    }

    /// Set a participant's expense share (the unequal-split flow).
    pub fn set_expense(&mut self, id: ParticipantId, amount: Decimal) -> Result<()> {
        self.get_mut(id)?.expense = amount;
        Ok(())
    }

    /// Set what a participant actually paid.
    pub fn set_payment(&mut self, id: ParticipantId, amount: Decimal) -> Result<()> {
        self.get_mut(id)?.payment = amount;
        Ok(())
    }

    /// Assign every participant an equal share of the bill, rounded to
    /// cent precision. No-op on an empty roster.
    ///
    /// Rounding can lose a sub-unit remainder (e.g. 200 over 7 heads is
    /// 28.57 each, summing to 199.99); the engine's whole-unit totals
    /// check absorbs it.
    pub fn split_equally(&mut self, total: Decimal) {
        if self.participants.is_empty() {
            return;
        }
        let share = round_cents(total / Decimal::from(self.participants.len()));
        for p in &mut self.participants {
            p.expense = share;
        }
    }

    /// Single-payer flow: the given participant paid the whole bill,
    /// everyone else paid nothing.
    pub fn paid_by(&mut self, id: ParticipantId, total: Decimal) -> Result<()> {
        // Validate the id before touching any payment.
        self.get_mut(id)?;
        for p in &mut self.participants {
            p.payment = if p.id == id { total } else { Decimal::ZERO };
        }
        Ok(())
    }

    /// Run the settlement engine over this roster.
    pub fn settle(&self, total: Decimal) -> Result<Vec<Settlement>> {
        settle(total, &self.participants)
    }

    fn get_mut(&mut self, id: ParticipantId) -> Result<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SplitError::ParticipantNotFound(id))
    }

    /// Trim and validate a name against the current roster. `exclude`
    /// skips the participant being renamed so renaming to the same name
    /// is allowed.
    fn validated_name(
        name: &str,
        participants: &[Participant],
        exclude: Option<ParticipantId>,
    ) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitError::EmptyParticipantName);
        }
        if participants
            .iter()
            .any(|p| Some(p.id) != exclude && p.name == name)
        {
            return Err(SplitError::DuplicateParticipantName {
                name: name.to_string(),
            });
        }
        Ok(name.to_string())
    }
}
