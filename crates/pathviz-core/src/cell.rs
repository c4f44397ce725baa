//! The [`Cell`] type — one square of the grid and the role it plays.

/// The role a cell plays in a search. Roles are mutually exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Free,
    Start,
    End,
    Obstacle,
}

/// A grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub role: Role,
}

impl Cell {
    /// Set the role (builder).
    #[inline]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self.role, Role::Start)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self.role, Role::End)
    }

    #[inline]
    pub const fn is_obstacle(self) -> bool {
        matches!(self.role, Role::Obstacle)
    }
}
