/// Common surface every list-rendered record exposes to the presentation
/// layer.
///
/// Responsibilities:
/// - Identify a record so in-place patches can target it (`id`)
/// - Expose the text fields the search box matches against
///
/// Records are owned by the controller that loaded them; callers never
/// mutate them directly, only through controller operations.
pub trait ListEntry {
    /// Unique record ID as assigned by the backend
    fn id(&self) -> &str;

    /// Text fields searched by the case-insensitive substring filter
    fn search_haystacks(&self) -> Vec<&str>;
}
