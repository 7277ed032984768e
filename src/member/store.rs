use crate::member::Result;
use crate::member::config::FamilyConfig;
use crate::member::error::MemberError::{IdAlreadyInUse, NoIdAvailable};
use derive_getters::Getters;
use dto::member::Member;
use dto::new_member::NewMember;
use serde_json::{Map, Number};

/// The family, held in memory for the lifetime of the process.
/// Members are kept in insertion order.
///
/// Ids come from a monotonic counter starting at 1 and are not reused after a deletion,
/// until the counter goes past `u32::MAX`: the smallest unused id is then picked.
/// A member can come with its own id, as long as no other member uses it;
/// the counter then moves past that id.
#[derive(Debug, Getters)]
pub struct MemberStore {
    last_name: String,
    #[getter(skip)]
    next_id: u64,
    #[getter(skip)]
    members: Vec<Member>,
}

impl MemberStore {
    pub fn new(last_name: String) -> Self {
        Self {
            last_name,
            next_id: 1,
            members: vec![],
        }
    }

    pub fn with_members(last_name: String, members: Vec<NewMember>) -> Result<Self> {
        let mut store = Self::new(last_name);
        for member in members {
            store.add(member)?;
        }
        Ok(store)
    }

    /// Build the store the server starts with.
    pub fn from_config(config: &FamilyConfig) -> Result<Self> {
        let members = if *config.seed() {
            seed_members()
        } else {
            vec![]
        };
        Self::with_members(config.last_name().clone(), members)
    }

    pub fn get_all(&self) -> Vec<Member> {
        self.members.clone()
    }

    pub fn get(&self, id: u32) -> Option<Member> {
        self.find(id).cloned()
    }

    pub fn add(&mut self, new_member: NewMember) -> Result<Member> {
        let (id, first_name, last_name, age, lucky_numbers, extra) = new_member.dissolve();
        let id = match id {
            Some(id) if self.find(id).is_some() => return Err(IdAlreadyInUse(id)),
            Some(id) => id,
            None => self.generate_id()?,
        };
        self.next_id = self.next_id.max(u64::from(id) + 1);

        let last_name = last_name.unwrap_or_else(|| self.last_name.clone());
        let member = Member::new(id, first_name, last_name, age, lucky_numbers, extra);
        self.members.push(member.clone());
        Ok(member)
    }

    /// Return whether a member has actually been removed.
    pub fn delete(&mut self, id: u32) -> bool {
        match self.members.iter().position(|member| *member.id() == id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn find(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|member| *member.id() == id)
    }

    fn generate_id(&self) -> Result<u32> {
        match u32::try_from(self.next_id) {
            Ok(id) => Ok(id),
            Err(_) => self.smallest_unused_id(),
        }
    }

    /// Once the counter went past `u32::MAX`, ids are taken from the gaps, deleted ones included.
    fn smallest_unused_id(&self) -> Result<u32> {
        let mut used_ids: Vec<u32> = self.members.iter().map(|member| *member.id()).collect();
        used_ids.sort_unstable();

        let mut candidate: u32 = 1;
        for id in used_ids {
            if id == candidate {
                candidate = candidate.checked_add(1).ok_or(NoIdAvailable)?;
            } else if id > candidate {
                break;
            }
        }
        Ok(candidate)
    }
}

/// The members the family starts with.
pub fn seed_members() -> Vec<NewMember> {
    vec![
        seed_member("John", 33, &[7, 13, 22]),
        seed_member("Jane", 35, &[10, 14, 3]),
        seed_member("Jimmy", 5, &[1]),
    ]
}

fn seed_member(first_name: &str, age: u32, lucky_numbers: &[u32]) -> NewMember {
    NewMember::new(
        None,
        first_name.to_owned(),
        None,
        Number::from(age),
        lucky_numbers.iter().map(|n| Number::from(*n)).collect(),
        Map::new(),
    )
}

#[cfg(test)]
pub mod tests {
    use crate::member::config::FamilyConfig;
    use crate::member::error::MemberError;
    use crate::member::store::MemberStore;
    use dto::member::tests::{MEMBER_LAST_NAME, get_expected_member};
    use dto::new_member::NewMember;
    use dto::new_member::tests::bo;
    use serde_json::json;

    pub fn empty_store() -> MemberStore {
        MemberStore::new(MEMBER_LAST_NAME.to_owned())
    }

    // region add
    #[test]
    fn should_add_member_with_generated_id() {
        let mut store = empty_store();

        let member = store.add(bo()).unwrap();

        assert_eq!(get_expected_member(), member);
        assert_eq!(1, store.len());
    }

    #[test]
    fn should_generate_distinct_ids() {
        let mut store = empty_store();

        let first = store.add(bo()).unwrap();
        let second = store.add(NewMember::new_test("Al", 12, &[1])).unwrap();

        assert_eq!(1, *first.id());
        assert_eq!(2, *second.id());
    }

    #[test]
    fn should_keep_given_id() {
        let mut store = empty_store();

        let member = store.add(bo().with_id(42)).unwrap();

        assert_eq!(42, *member.id());
    }

    #[test]
    fn should_generate_id_after_given_one() {
        let mut store = empty_store();
        store.add(bo().with_id(42)).unwrap();

        let member = store.add(bo()).unwrap();

        assert_eq!(43, *member.id());
    }

    #[test]
    fn should_not_add_member_with_id_in_use() {
        let mut store = empty_store();
        store.add(bo()).unwrap();

        let error = store.add(bo().with_id(1)).unwrap_err();

        assert_eq!(MemberError::IdAlreadyInUse(1), error);
        assert_eq!(1, store.len());
    }

    #[test]
    fn should_generate_unused_id_past_the_maximum() {
        let mut store = empty_store();
        store.add(bo()).unwrap();
        store.add(bo()).unwrap();
        store.add(bo().with_id(u32::MAX)).unwrap();

        let first = store.add(bo()).unwrap();
        let second = store.add(bo()).unwrap();

        assert_eq!(3, *first.id());
        assert_eq!(4, *second.id());
    }

    #[test]
    fn should_fill_gaps_past_the_maximum() {
        let mut store = empty_store();
        store.add(bo().with_id(0)).unwrap();
        store.add(bo()).unwrap();
        store.add(bo().with_id(3)).unwrap();
        store.add(bo().with_id(u32::MAX)).unwrap();

        let member = store.add(bo()).unwrap();

        assert_eq!(2, *member.id());
        assert_eq!(5, store.len());
    }

    #[test]
    fn should_not_reuse_id_of_deleted_member() {
        let mut store = empty_store();
        store.add(bo()).unwrap();
        store.add(bo()).unwrap();
        assert!(store.delete(2));

        let member = store.add(bo()).unwrap();

        assert_eq!(3, *member.id());
    }

    #[test]
    fn should_keep_given_last_name_and_extra_fields() {
        let mut store = empty_store();

        let member = store
            .add(bo().with_last_name("Smith").with_extra("nickname", json!("Bobo")))
            .unwrap();

        assert_eq!("Smith", member.last_name());
        assert_eq!(Some(&json!("Bobo")), member.extra().get("nickname"));
    }
    // endregion

    // region get
    #[test]
    fn should_get_member() {
        let mut store = empty_store();
        let member = store.add(bo()).unwrap();

        assert_eq!(Some(member), store.get(1));
    }

    #[test]
    fn should_not_get_unknown_member() {
        let mut store = empty_store();
        store.add(bo()).unwrap();

        assert_eq!(None, store.get(2));
    }

    #[test]
    fn should_get_all_members_in_insertion_order() {
        let mut store = empty_store();
        store.add(bo().with_id(5)).unwrap();
        store.add(NewMember::new_test("Al", 12, &[1]).with_id(2)).unwrap();

        let ids: Vec<u32> = store.get_all().iter().map(|member| *member.id()).collect();

        assert_eq!(vec![5, 2], ids);
    }

    #[test]
    fn should_get_no_member_when_empty() {
        assert!(empty_store().get_all().is_empty());
    }
    // endregion

    // region delete
    #[test]
    fn should_delete_member() {
        let mut store = empty_store();
        store.add(bo()).unwrap();

        assert!(store.delete(1));
        assert_eq!(None, store.get(1));
        assert!(store.is_empty());
    }

    #[test]
    fn should_not_delete_unknown_member() {
        let mut store = empty_store();
        store.add(bo()).unwrap();

        assert!(!store.delete(2));
        assert_eq!(1, store.len());
    }
    // endregion

    // region from_config
    #[test]
    fn should_seed_family() {
        let store = MemberStore::from_config(&FamilyConfig::new("Jackson".to_owned(), true)).unwrap();

        let first_names: Vec<String> = store
            .get_all()
            .iter()
            .map(|member| member.first_name().clone())
            .collect();
        assert_eq!(vec!["John", "Jane", "Jimmy"], first_names);
        assert!(store.get_all().iter().all(|member| member.last_name() == "Jackson"));
    }

    #[test]
    fn should_not_seed_family() {
        let store = MemberStore::from_config(&FamilyConfig::new("Doe".to_owned(), false)).unwrap();

        assert!(store.is_empty());
        assert_eq!("Doe", store.last_name());
    }
    // endregion
}
