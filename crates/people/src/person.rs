use std::cell::RefCell;
use std::rc::{Rc, Weak};

use household_core::{Entity, PersonId};
use household_employment::Job;

/// Minimum age to hold a job.
pub const MIN_WORKING_AGE: u32 = 16;

/// Minimum age for both partners to be recorded as spouses.
pub const MIN_MARRIAGE_AGE: u32 = 18;

/// Shared, mutable handle to a [`Person`].
pub type PersonRef = Rc<RefCell<Person>>;

/// A person with an optional job and an optional (weakly held) spouse.
///
/// `set_job` and `set_spouse` never fail: an assignment that breaks an age
/// rule clears the field instead, and the return value says whether the
/// assignment took effect.
#[derive(Debug)]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    age: u32,
    job: Option<Job>,
    spouse: Option<Weak<RefCell<Person>>>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self::with_id(PersonId::new(), first_name, last_name, age)
    }

    pub fn with_id(
        id: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Wrap into a shared handle.
    pub fn into_ref(self) -> PersonRef {
        Rc::new(RefCell::new(self))
    }

    pub fn id_typed(&self) -> PersonId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Update the age. Existing job and spouse are kept; the gates only apply
    /// on assignment.
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Assign (or remove) a job. Under [`MIN_WORKING_AGE`] the job is cleared.
    pub fn set_job(&mut self, job: Option<Job>) -> bool {
        if self.age >= MIN_WORKING_AGE {
            self.job = job;
            true
        } else {
            self.job = None;
            false
        }
    }

    /// The current spouse, if one is set and still alive.
    pub fn spouse(&self) -> Option<PersonRef> {
        self.spouse.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_married(&self) -> bool {
        self.spouse().is_some()
    }

    /// Record `candidate` as this person's spouse.
    ///
    /// Only this side of the relation is written. Both partners must be at
    /// least [`MIN_MARRIAGE_AGE`]; otherwise (or when `candidate` is `None`)
    /// the spouse is cleared. A candidate that is already mutably borrowed,
    /// which is the case when it is `self` behind the same handle, counts as
    /// ineligible.
    pub fn set_spouse(&mut self, candidate: Option<&PersonRef>) -> bool {
        let eligible = candidate.filter(|c| {
            self.age >= MIN_MARRIAGE_AGE
                && c.try_borrow().is_ok_and(|c| c.age >= MIN_MARRIAGE_AGE)
        });
        self.spouse = eligible.map(Rc::downgrade);
        self.spouse.is_some()
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Person: firstName:{} lastName:{} age:{} job:",
            self.first_name, self.last_name, self.age
        )?;
        match &self.job {
            Some(job) => write!(f, "{}", job.pay())?,
            None => f.write_str("nil")?,
        }
        f.write_str(" spouse:")?;
        match self.spouse().as_ref().and_then(|s| s.try_borrow().ok()) {
            Some(spouse) => f.write_str(&spouse.first_name)?,
            None => f.write_str("nil")?,
        }
        f.write_str("]")
    }
}
