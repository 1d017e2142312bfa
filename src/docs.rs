use utoipa::OpenApi;

use crate::modules::film::dto::{CreateFilmRequest, IdRef, LikeCountResponse, UpdateFilmRequest};
use crate::modules::film::model::Film;
use crate::modules::genre::model::Genre;
use crate::modules::mpa::model::Mpa;
use crate::modules::ranking::model::RankedFilm;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::film::handler::list_films,
        crate::modules::film::handler::get_film,
        crate::modules::film::handler::create_film,
        crate::modules::film::handler::update_film,
        crate::modules::ranking::handler::popular_films,
        crate::modules::like::handler::like_film,
        crate::modules::like::handler::unlike_film,
        crate::modules::like::handler::count_likes,
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::get_genre,
        crate::modules::mpa::handler::list_mpa,
        crate::modules::mpa::handler::get_mpa,
    ),
    components(
        schemas(
            Film, RankedFilm, Genre, Mpa, IdRef,
            CreateFilmRequest, UpdateFilmRequest, LikeCountResponse,
        )
    ),
    tags(
        (name = "Films", description = "Film catalog and rankings"),
        (name = "Likes", description = "Per-user film likes"),
        (name = "Catalog", description = "Genre and rating lookups")
    )
)]
pub struct ApiDoc;
