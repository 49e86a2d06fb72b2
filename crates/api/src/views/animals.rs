//! Views for the `/animals` resource: list, detail, and the two forms.

use menagerie_db::models::animal::Animal;

use super::{escape, layout};

/// List view: every animal with a link to its detail page.
pub fn index(animals: &[Animal]) -> String {
    let mut rows = String::new();
    for animal in animals {
        rows.push_str(&format!(
            "<li><a href=\"/animals/{id}\">{name}</a> <span class=\"species\">{species}</span></li>\n",
            id = animal.id,
            name = escape(&animal.animal_type),
            species = escape(&animal.species),
        ));
    }
    let body = format!(
        "<h1>Animals</h1>\n\
         <ul class=\"animals\">\n\
         {rows}\
         </ul>\n\
         <a class=\"action\" href=\"/animals/new\">Add an animal</a>\n"
    );
    layout("Animals", &body)
}

/// Detail view for a single animal.
pub fn show(animal: &Animal) -> String {
    let extinct = if animal.extinct { "yes" } else { "no" };
    let body = format!(
        "<h1>{name}</h1>\n\
         <img src=\"{img}\" alt=\"{name}\">\n\
         <dl>\n\
         <dt>Species</dt><dd>{species}</dd>\n\
         <dt>Location</dt><dd>{location}</dd>\n\
         <dt>Life expectancy</dt><dd>{life} years</dd>\n\
         <dt>Extinct</dt><dd>{extinct}</dd>\n\
         </dl>\n\
         <a class=\"action\" href=\"/animals/{id}/edit\">Edit</a>\n\
         <form method=\"POST\" action=\"/animals/{id}?_method=DELETE\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n\
         <a href=\"/animals\">Back to all animals</a>\n",
        name = escape(&animal.animal_type),
        img = escape(&animal.img),
        species = escape(&animal.species),
        location = escape(&animal.location),
        life = animal.life_expectancy,
        id = animal.id,
    );
    layout(&animal.animal_type, &body)
}

/// Creation form.
pub fn new_form() -> String {
    let body = format!(
        "<h1>New animal</h1>\n\
         <form method=\"POST\" action=\"/animals\">\n\
         {fields}\
         <button type=\"submit\">Create</button>\n\
         </form>\n\
         <a href=\"/animals\">Back to all animals</a>\n",
        fields = fields(None),
    );
    layout("New animal", &body)
}

/// Edit form, pre-filled with the current values. Submits through the
/// method-override convention to reach the PUT route.
pub fn edit_form(animal: &Animal) -> String {
    let body = format!(
        "<h1>Edit {name}</h1>\n\
         <form method=\"POST\" action=\"/animals/{id}?_method=PUT\">\n\
         {fields}\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <a href=\"/animals/{id}\">Cancel</a>\n",
        name = escape(&animal.animal_type),
        id = animal.id,
        fields = fields(Some(animal)),
    );
    layout("Edit animal", &body)
}

/// Shared form fields, empty for creation and pre-filled for editing.
fn fields(animal: Option<&Animal>) -> String {
    let animal_type = animal.map(|a| escape(&a.animal_type)).unwrap_or_default();
    let species = animal.map(|a| escape(&a.species)).unwrap_or_default();
    let location = animal.map(|a| escape(&a.location)).unwrap_or_default();
    let img = animal.map(|a| escape(&a.img)).unwrap_or_default();
    let life = animal
        .map(|a| a.life_expectancy.to_string())
        .unwrap_or_default();
    let checked = if animal.is_some_and(|a| a.extinct) {
        " checked"
    } else {
        ""
    };
    format!(
        "<label>Type <input type=\"text\" name=\"animalType\" value=\"{animal_type}\"></label>\n\
         <label>Species <input type=\"text\" name=\"species\" value=\"{species}\"></label>\n\
         <label>Location <input type=\"text\" name=\"location\" value=\"{location}\"></label>\n\
         <label>Life expectancy <input type=\"number\" step=\"any\" name=\"lifeExpectancy\" value=\"{life}\"></label>\n\
         <label>Image URL <input type=\"text\" name=\"img\" value=\"{img}\"></label>\n\
         <label>Extinct <input type=\"checkbox\" name=\"extinct\"{checked}></label>\n"
    )
}
