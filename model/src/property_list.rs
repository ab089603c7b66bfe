//! Property lists: the optional projection carried by enumeration requests.

use std::sync::Arc;

use crate::name::Name;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct PropertyListRep {
    names: Vec<Name>,
    tags: Vec<u32>,
}

/// A list of property names, or null meaning "all properties".
///
/// Each name carries a case-insensitive tag so that membership checks can
/// skip most string comparisons. Decoded lists keep their tags as read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct PropertyList {
    rep: Option<Arc<PropertyListRep>>,
}

impl PropertyList {
    /// Creates the null list.
    #[must_use]
    pub const fn null() -> Self {
        Self { rep: None }
    }

    /// Creates a non-null list, computing a tag for each name.
    #[must_use]
    pub fn new(names: Vec<Name>) -> Self {
        let tags = names.iter().map(Name::tag).collect();
        Self::from_parts(names, tags)
    }

    /// Assembles a non-null list from decoded names and tags.
    ///
    /// The two lengths may differ on the wire; [`contains`](Self::contains)
    /// falls back to name comparison when they do.
    #[must_use]
    pub fn from_parts(names: Vec<Name>, tags: Vec<u32>) -> Self {
        Self {
            rep: Some(Arc::new(PropertyListRep { names, tags })),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.rep.is_none()
    }

    /// Returns the names; empty for the null list.
    #[must_use]
    pub fn names(&self) -> &[Name] {
        self.rep.as_ref().map_or(&[], |rep| rep.names.as_slice())
    }

    /// Returns the tags; empty for the null list.
    #[must_use]
    pub fn tags(&self) -> &[u32] {
        self.rep.as_ref().map_or(&[], |rep| rep.tags.as_slice())
    }

    /// Returns `true` if `name` is selected. The null list selects every name.
    #[must_use]
    pub fn contains(&self, name: &Name) -> bool {
        let Some(rep) = self.rep.as_ref() else {
            return true;
        };
        if rep.tags.len() == rep.names.len() {
            let tag = name.tag();
            rep.names
                .iter()
                .zip(&rep.tags)
                .any(|(candidate, &candidate_tag)| {
                    candidate_tag == tag && candidate.eq_ignore_case(name)
                })
        } else {
            rep.names.iter().any(|candidate| candidate.eq_ignore_case(name))
        }
    }

    /// Appends a name, turning a null list into a one-element list.
    pub fn append(&mut self, name: Name) {
        let tag = name.tag();
        let rep = Arc::make_mut(self.rep.get_or_insert_with(Arc::default));
        rep.names.push(name);
        rep.tags.push(tag);
    }
}
