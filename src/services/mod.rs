pub mod city_search;
pub mod delivery_service;
pub mod floor_carry_service;
