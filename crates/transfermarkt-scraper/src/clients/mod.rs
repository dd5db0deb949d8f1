pub mod transfermarkt;
