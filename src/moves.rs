use std::fmt::{self, Debug, Display, Formatter};

use crate::data::CarId;

/// One car sliding along its axis.
///
/// Displacement is in cells: positive is right or down, negative is left or up.
/// Moving a vertical car two rows down on an 8x8 board is `+16`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub car: CarId,
    pub displacement: isize,
}

impl Action {
    pub fn new<C: Into<CarId>>(car: C, displacement: isize) -> Self {
        Action {
            car: car.into(),
            displacement,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}", self.car, self.displacement)
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.car, self.displacement)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Actions(Vec<Action>);

impl Actions {
    pub fn new(actions: Vec<Action>) -> Self {
        Actions(actions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.0
    }
}

impl From<Vec<Action>> for Actions {
    fn from(actions: Vec<Action>) -> Self {
        Actions(actions)
    }
}

impl IntoIterator for Actions {
    type Item = Action;
    type IntoIter = ::std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = ::std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl Debug for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Actions {
        Actions::new(vec![
            Action::new('A', -3),
            Action::new('B', 16),
            Action::new('Y', 24),
            Action::new('*', 4),
        ])
    }

    #[test]
    fn formatting_actions() {
        let actions = reference();
        assert_eq!(actions.to_string(), "A-3 B+16 Y+24 *+4");
        assert_eq!(
            format!("{:?}", actions),
            "[('A', -3), ('B', 16), ('Y', 24), ('*', 4)]"
        );
        assert_eq!(Actions::default().to_string(), "");
    }

    #[test]
    fn iterating() {
        let actions = reference();
        assert_eq!(actions.len(), 4);
        assert!(!actions.is_empty());

        let mut v = Vec::new();
        for &a in &actions {
            v.push(a);
        }
        for a in actions.clone() {
            v.push(a);
        }
        assert_eq!(v.len(), 8);
        assert_eq!(&v[..4], actions.as_slice());
        assert_eq!(&v[4..], actions.as_slice());
    }
}
