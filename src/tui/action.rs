use crate::catalog::CatalogAction;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from user input (key events); catalog
/// changes are wrapped so the catalog reducer stays independent of
/// the interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Forward an action to the catalog reducer
    Catalog(CatalogAction),

    // Focus actions
    FocusNext,
    FocusPrevious,

    // Cursor movement within the focused panel
    CursorUp,
    CursorDown,

    /// Apply the genre under the cursor as the active filter
    ApplyGenre,

    // Search entry mode
    SearchStart,
    SearchExit,
    SearchInput(char),
    SearchBackspace,

    // Page navigation, clamped to the valid range before dispatching
    PagePrevious,
    PageNext,
    PageJump(usize),

    // Sort controls
    SortCycleField,
    SortToggleOrder,

    // Row actions on the movie under the cursor
    LikeSelected,
    DeleteSelected,

    // System actions
    Quit,
}
