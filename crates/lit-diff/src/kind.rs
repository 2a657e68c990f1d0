use crate::DiffError;

/// The six recorded change variants — `spec.md` §3, §4.4.
///
/// Discriminants match the original on-disk `type:<int>` tag so existing
/// repositories parse unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    FileNew = 1,
    FileDeleted = 2,
    FileModified = 3,
    FolderNew = 4,
    FolderDeleted = 5,
    FolderModified = 6,
}

impl DiffKind {
    pub fn is_folder(self) -> bool {
        matches!(
            self,
            DiffKind::FolderNew | DiffKind::FolderDeleted | DiffKind::FolderModified
        )
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(tag: u8) -> Result<Self, DiffError> {
        match tag {
            1 => Ok(DiffKind::FileNew),
            2 => Ok(DiffKind::FileDeleted),
            3 => Ok(DiffKind::FileModified),
            4 => Ok(DiffKind::FolderNew),
            5 => Ok(DiffKind::FolderDeleted),
            6 => Ok(DiffKind::FolderModified),
            other => Err(DiffError::UnknownKind(other)),
        }
    }
}
