pub mod carro_controller;
