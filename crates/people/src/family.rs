use household_core::{DomainError, DomainResult};

use crate::person::PersonRef;

/// Minimum age at least one founding spouse must reach before children are added.
pub const MIN_PARENT_AGE: u32 = 21;

/// Two founding spouses (indices 0 and 1) followed by their children.
#[derive(Debug)]
pub struct Family {
    members: Vec<PersonRef>,
}

impl Family {
    /// Marry two previously unmarried persons and found a family.
    ///
    /// Both spouse links go through `Person::set_spouse`, so the marriage age
    /// gate still applies: underage founders form a family whose spouse links
    /// stay empty. The same handle passed twice is not an error either; the
    /// setter cannot inspect a candidate it is mutating, so no link is made.
    pub fn try_new(spouse1: PersonRef, spouse2: PersonRef) -> DomainResult<Self> {
        for founder in [&spouse1, &spouse2] {
            let founder = founder.borrow();
            if founder.is_married() {
                return Err(DomainError::already_married(founder.full_name()));
            }
        }

        spouse1.borrow_mut().set_spouse(Some(&spouse2));
        spouse2.borrow_mut().set_spouse(Some(&spouse1));

        tracing::debug!(
            spouse1 = %spouse1.borrow().id_typed(),
            spouse2 = %spouse2.borrow().id_typed(),
            married = spouse1.borrow().is_married(),
            "family founded"
        );

        Ok(Self {
            members: vec![spouse1, spouse2],
        })
    }

    /// # Panics
    ///
    /// Panics with `AlreadyMarried` when either founder already has a spouse.
    #[track_caller]
    pub fn new(spouse1: PersonRef, spouse2: PersonRef) -> Self {
        Self::try_new(spouse1, spouse2).unwrap_or_else(|e| e.fatal())
    }

    pub fn members(&self) -> &[PersonRef] {
        &self.members
    }

    pub fn founders(&self) -> &[PersonRef] {
        &self.members[..2]
    }

    pub fn children(&self) -> &[PersonRef] {
        &self.members[2..]
    }

    /// Add a child if at least one founder is [`MIN_PARENT_AGE`] or older.
    ///
    /// Returns `false` and leaves the family unchanged otherwise.
    pub fn have_child(&mut self, child: PersonRef) -> bool {
        if self.members.len() < 2 {
            return false;
        }
        let old_enough = self
            .founders()
            .iter()
            .any(|founder| founder.borrow().age() >= MIN_PARENT_AGE);
        if !old_enough {
            tracing::debug!(child = %child.borrow().id_typed(), "child rejected: founders too young");
            return false;
        }

        tracing::debug!(child = %child.borrow().id_typed(), "child added");
        self.members.push(child);
        true
    }

    /// Sum of default-hours income over every member holding a job.
    pub fn household_income(&self) -> i64 {
        self.members
            .iter()
            .filter_map(|member| member.borrow().job().map(|job| job.calculate_income()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Person;
    use household_employment::Job;
    use proptest::prelude::*;
    use std::rc::Rc;

    fn person(first: &str, age: u32) -> PersonRef {
        Person::new(first, "Doe", age).into_ref()
    }

    #[test]
    fn founding_marries_both_ways() {
        let a = person("Ann", 30);
        let b = person("Bob", 31);
        let family = Family::new(Rc::clone(&a), Rc::clone(&b));

        assert!(Rc::ptr_eq(&a.borrow().spouse().unwrap(), &b));
        assert!(Rc::ptr_eq(&b.borrow().spouse().unwrap(), &a));
        assert_eq!(family.members().len(), 2);
        assert!(family.children().is_empty());
    }

    #[test]
    fn founding_rejects_already_married_person() {
        let a = person("Ann", 30);
        let b = person("Bob", 31);
        let c = person("Cat", 29);
        let _first = Family::new(Rc::clone(&a), Rc::clone(&b));

        let err = Family::try_new(Rc::clone(&c), Rc::clone(&b)).unwrap_err();
        assert_eq!(err, DomainError::AlreadyMarried("Bob Doe".to_string()));
        assert!(!c.borrow().is_married());
    }

    #[test]
    #[should_panic(expected = "already married: Ann Doe")]
    fn new_panics_when_founder_is_married() {
        let a = person("Ann", 30);
        let b = person("Bob", 31);
        a.borrow_mut().set_spouse(Some(&b));
        let _ = Family::new(a, person("Cat", 29));
    }

    #[test]
    fn same_person_twice_founds_an_unmarried_family() {
        let a = person("Ann", 30);
        let family = Family::try_new(Rc::clone(&a), Rc::clone(&a)).unwrap();

        assert_eq!(family.members().len(), 2);
        assert!(Rc::ptr_eq(&family.members()[0], &family.members()[1]));
        assert!(!a.borrow().is_married());
    }

    #[test]
    fn underage_founders_stay_unmarried() {
        let a = person("Kim", 17);
        let b = person("Lee", 18);
        let family = Family::new(Rc::clone(&a), Rc::clone(&b));

        assert_eq!(family.members().len(), 2);
        assert!(!a.borrow().is_married());
        assert!(!b.borrow().is_married());
    }

    #[test]
    fn have_child_needs_a_founder_of_twenty_one() {
        let mut young = Family::new(person("Ann", 20), person("Bob", 19));
        assert!(!young.have_child(person("Kid", 0)));
        assert_eq!(young.members().len(), 2);

        let mut mixed = Family::new(person("Ann", 21), person("Bob", 19));
        assert!(mixed.have_child(person("Kid", 0)));
        assert!(mixed.have_child(person("Tot", 0)));
        assert_eq!(mixed.children().len(), 2);
        assert_eq!(mixed.members()[3].borrow().first_name(), "Tot");
    }

    #[test]
    fn household_income_counts_only_employed_members() {
        let a = person("Ann", 30);
        let b = person("Bob", 31);
        a.borrow_mut().set_job(Some(Job::salaried("Engineer", 50_000)));
        let family = Family::new(a, b);

        assert_eq!(family.household_income(), 50_000);
    }

    #[test]
    fn household_income_includes_working_children() {
        let a = person("Ann", 45);
        let b = person("Bob", 44);
        a.borrow_mut().set_job(Some(Job::salaried("Engineer", 50_000)));
        b.borrow_mut().set_job(Some(Job::hourly("Nurse", 30.0)));
        let mut family = Family::new(a, b);

        let teen = person("Max", 17);
        teen.borrow_mut().set_job(Some(Job::hourly("Cashier", 10.0)));
        let kid = person("Zoe", 12);
        kid.borrow_mut().set_job(Some(Job::hourly("Lemonade", 5.0)));
        assert!(family.have_child(teen));
        assert!(family.have_child(kid));

        assert_eq!(family.household_income(), 50_000 + 60_000 + 20_000);
    }

    #[test]
    fn household_income_of_unemployed_family_is_zero() {
        let family = Family::new(person("Ann", 30), person("Bob", 31));
        assert_eq!(family.household_income(), 0);
    }

    fn maybe_job(choice: Option<(bool, i64)>) -> Option<Job> {
        choice.map(|(hourly, pay)| {
            if hourly {
                Job::hourly("Hourly", pay as f64 / 4.0)
            } else {
                Job::salaried("Salary", pay)
            }
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: household income is the sum of each employed member's
        /// default-hours income.
        #[test]
        fn household_income_sums_employed_members(
            founder_jobs in prop::collection::vec(
                prop::option::of((any::<bool>(), 0i64..400_000)), 2),
            child_jobs in prop::collection::vec(
                (0u32..30, prop::option::of((any::<bool>(), 0i64..400_000))), 0..6),
        ) {
            let a = person("Ann", 40);
            let b = person("Bob", 40);
            a.borrow_mut().set_job(maybe_job(founder_jobs[0]));
            b.borrow_mut().set_job(maybe_job(founder_jobs[1]));
            let mut family = Family::new(a, b);

            for (age, job) in child_jobs {
                let child = person("Kid", age);
                child.borrow_mut().set_job(maybe_job(job));
                prop_assert!(family.have_child(child));
            }

            let expected: i64 = family
                .members()
                .iter()
                .filter_map(|m| m.borrow().job().map(Job::calculate_income))
                .sum();
            prop_assert_eq!(family.household_income(), expected);
        }

        /// Property: a child is accepted exactly when the older founder is at
        /// least 21, and a rejected child leaves the members untouched.
        #[test]
        fn have_child_follows_oldest_founder(
            age1 in 0u32..40,
            age2 in 0u32..40,
        ) {
            let a = person("Ann", age1);
            let b = person("Bob", age2);
            let mut family = Family::new(Rc::clone(&a), Rc::clone(&b));

            let accepted = family.have_child(person("Kid", 0));
            prop_assert_eq!(accepted, age1.max(age2) >= MIN_PARENT_AGE);

            if accepted {
                prop_assert_eq!(family.members().len(), 3);
            } else {
                prop_assert_eq!(family.members().len(), 2);
                prop_assert!(Rc::ptr_eq(&family.members()[0], &a));
                prop_assert!(Rc::ptr_eq(&family.members()[1], &b));
            }
        }
    }
}
