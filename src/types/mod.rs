pub mod city;
pub mod country;
pub mod measurement;
pub mod page;
pub mod parameter;
pub mod selection;
