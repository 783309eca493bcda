/// Command layer: the fetch → join → render pipeline.
pub mod list;
