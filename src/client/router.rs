use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    admin::AdminUsers,
    master::{BudgetOwners, Categories},
    Budgets, Dashboard, Login, NotFound, Transactions,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login")]
        Login {},

        #[layout(RequiresLoggedIn)]
            #[route("/")]
            Dashboard {},

            #[route("/budgets")]
            Budgets {},

            #[route("/transactions")]
            Transactions {},

            #[nest("/master")]
                #[route("/budget-owners")]
                BudgetOwners {},

                #[route("/categories")]
                Categories {},
            #[end_nest]
        #[end_layout]

        #[layout(RequiresAdmin)]
            #[route("/admin/users")]
            AdminUsers {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
