/// List, column and view operations
pub mod list;
/// List item operations
pub mod item;
/// Folder operations
pub mod folder;
/// Document library file operations
pub mod file;
/// List item attachment operations
pub mod attachment;
