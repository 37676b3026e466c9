use crate::graphql::export_sdl;

pub fn handle_schema() {
    print!("{}", export_sdl());
}
