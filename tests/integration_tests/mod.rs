mod agreements;
mod aspsps;
mod auth;
mod requisitions;
