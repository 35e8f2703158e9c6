const ARGUMENT_PREFIX: &str = "a";

/// An argument in a generated framework, identified by a dense numeric id.
///
/// Static only: unlike the dynamic-update generator this crate was adapted
/// from, there is no `optional`/`Dead`/`Alive` lifecycle here. A generated
/// framework is complete the moment it's generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    from: usize,
    to: usize,
}

impl Argument {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn name(&self) -> String {
        format!("{ARGUMENT_PREFIX}{}", self.0)
    }
}

impl Attack {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn from_name(&self) -> String {
        format!("{ARGUMENT_PREFIX}{}", self.from)
    }

    pub fn to_name(&self) -> String {
        format!("{ARGUMENT_PREFIX}{}", self.to)
    }
}
