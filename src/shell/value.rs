use crate::prelude::*;

/// A named set in a shell session; either kind may be held under a name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnySet {
    Int(IntSet),
    Text(StringSet),
}

/// The derived-set operations the shell can store under a new name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algebra {
    Union,
    Intersection,
    Difference,
}

impl Algebra {
    /// Applies the operation to two sets of the same kind.
    pub fn apply<T, S: SetOps<T>>(&self, lhs: &S, rhs: &S) -> S {
        match self {
            Algebra::Union        => lhs.union(rhs),
            Algebra::Intersection => lhs.intersect(rhs),
            Algebra::Difference   => lhs.difference(rhs),
        }
    }
}

impl std::str::FromStr for Algebra {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "union"        => Ok(Algebra::Union),
            "intersection" => Ok(Algebra::Intersection),
            "difference"   => Ok(Algebra::Difference),
            _              => Err(anyhow!("unrecognized set operation {s}")),
        }
    }
}

/// Parses every token up front, so that one bad element leaves the set untouched.
fn parse_all<T: Token>(elements: &[&str]) -> Result<Vec<T>> {
    elements.iter().map(|s| T::parse_token(s)).collect()
}

impl AnySet {
    /// Parses a literal as a set of the named kind (`int` or `text`).
    pub fn parse(kind: &str, literal: &str) -> Result<AnySet> {
        match kind {
            k if k == i64::KIND    => Ok(AnySet::Int(literal.parse()?)),
            k if k == String::KIND => Ok(AnySet::Text(literal.parse()?)),
            _                      => Err(anyhow!("unrecognized set kind {kind}")),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnySet::Int(_)  => i64::KIND,
            AnySet::Text(_) => String::KIND,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            AnySet::Int(s)  => s.size(),
            AnySet::Text(s) => s.size(),
        }
    }

    pub fn add(&mut self, elements: &[&str]) -> Result<()> {
        match self {
            AnySet::Int(s)  => s.extend(parse_all::<i64>(elements)?),
            AnySet::Text(s) => s.extend(parse_all::<String>(elements)?),
        };
        Ok(())
    }

    pub fn remove(&mut self, elements: &[&str]) -> Result<()> {
        match self {
            AnySet::Int(s)  => parse_all::<i64>(elements)?.iter().for_each(|e| s.remove(e)),
            AnySet::Text(s) => parse_all::<String>(elements)?.iter().for_each(|e| s.remove(e)),
        };
        Ok(())
    }

    pub fn contains(&self, element: &str) -> Result<bool> {
        match self {
            AnySet::Int(s)  => Ok(s.contains(&i64::parse_token(element)?)),
            AnySet::Text(s) => Ok(s.contains(&String::parse_token(element)?)),
        }
    }

    pub fn equal(&self, other: &AnySet) -> Result<bool> {
        match (self, other) {
            (AnySet::Int(a), AnySet::Int(b))   => Ok(a.equal(b)),
            (AnySet::Text(a), AnySet::Text(b)) => Ok(a.equal(b)),
            _                                  => Err(self.mismatch(other)),
        }
    }

    pub fn subset(&self, other: &AnySet) -> Result<bool> {
        match (self, other) {
            (AnySet::Int(a), AnySet::Int(b))   => Ok(a.subset(b)),
            (AnySet::Text(a), AnySet::Text(b)) => Ok(a.subset(b)),
            _                                  => Err(self.mismatch(other)),
        }
    }

    /// Produces a new set from this one and `other`; neither operand changes.
    pub fn combine(&self, op: Algebra, other: &AnySet) -> Result<AnySet> {
        match (self, other) {
            (AnySet::Int(a), AnySet::Int(b))   => Ok(AnySet::Int(op.apply(a, b))),
            (AnySet::Text(a), AnySet::Text(b)) => Ok(AnySet::Text(op.apply(a, b))),
            _                                  => Err(self.mismatch(other)),
        }
    }

    fn mismatch(&self, other: &AnySet) -> Error {
        anyhow!("cannot combine a set of {} elements with a set of {} elements", self.kind(), other.kind())
    }
}

impl std::fmt::Display for AnySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnySet::Int(s)  => std::fmt::Display::fmt(s, f),
            AnySet::Text(s) => std::fmt::Display::fmt(s, f),
        }
    }
}
