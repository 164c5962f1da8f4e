pub mod support;

mod site_routes;
