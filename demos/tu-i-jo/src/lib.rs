use wasm_bindgen::prelude::*;

mod game;
use game::TuIJo;

lyric_web::export_game!(TuIJo, "tu-i-jo");
