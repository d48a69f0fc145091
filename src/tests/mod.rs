pub mod unit_models_learning;
