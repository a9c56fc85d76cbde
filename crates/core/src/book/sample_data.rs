use super::NewBook;

/// The books inserted into an empty store at startup, in insertion order.
pub fn sample_books() -> Vec<NewBook> {
    vec![
        NewBook::new("1984", "George Orwell").with_description("Dystopian novel"),
        NewBook::new("To Kill a Mockingbird", "Harper Lee")
            .with_description("Classic novel on justice"),
    ]
}
