mod targeting_draft;
mod targeting_editor;
