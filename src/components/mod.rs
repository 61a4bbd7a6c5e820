pub mod feature_card;
