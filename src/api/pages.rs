//! Server-rendered HTML list pages.
//!
//! Every stored value passes through [`escape_html`] on its way into the page.

use crate::{
    models::{Book, Customer},
    sanitize::escape_html,
};

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/books/">Books</a> | <a href="/customers/">Customers</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    )
}

fn delete_button(action: &str) -> String {
    format!(
        r#"<form method="post" action="{}"><button type="submit">Delete</button></form>"#,
        escape_html(action)
    )
}

pub fn render_books(books: &[Book]) -> String {
    let rows: String = books
        .iter()
        .map(|book| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&book.name),
                escape_html(&book.author),
                book.year_published,
                escape_html(&book.book_type),
                escape_html(&book.status),
                delete_button(&format!("/books/{}/delete", book.id)),
            )
        })
        .collect();

    let body = format!(
        r#"<table>
<thead><tr><th>Name</th><th>Author</th><th>Year published</th><th>Type</th><th>Status</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<h2>Add a book</h2>
<form method="post" action="/books/create">
<input name="name" placeholder="Name" required>
<input name="author" placeholder="Author" required>
<input name="year_published" type="number" placeholder="Year published" required>
<input name="book_type" placeholder="Type">
<button type="submit">Add</button>
</form>"#
    );

    layout("Books", &body)
}

pub fn render_customers(customers: &[Customer]) -> String {
    let rows: String = customers
        .iter()
        .map(|customer| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&customer.name),
                escape_html(&customer.city),
                customer.age,
                delete_button(&format!("/customers/{}/delete", customer.id)),
            )
        })
        .collect();

    let body = format!(
        r#"<table>
<thead><tr><th>Name</th><th>City</th><th>Age</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<h2>Add a customer</h2>
<form method="post" action="/customers/create">
<input name="name" placeholder="Name" required>
<input name="city" placeholder="City" required>
<input name="age" type="number" min="0" max="150" placeholder="Age" required>
<button type="submit">Add</button>
</form>"#
    );

    layout("Customers", &body)
}
