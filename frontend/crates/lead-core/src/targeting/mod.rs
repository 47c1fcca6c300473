pub mod targeting_draft;
pub mod targeting_editor;
