mod algebra_properties;
mod interchange;
