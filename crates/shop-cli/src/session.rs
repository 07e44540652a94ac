//! # Interactive Session
//!
//! Menu state machine for one storefront session: authentication, cart
//! management, and the checkout flow. Core failures are displayed and
//! the menu continues; nothing here terminates the process.

use crate::prompt::Prompter;
use shop_core::{checkout, AccountDirectory, Cart, Catalog, PaymentMethod, ShopError, User};
use std::io::{self, BufRead, Write};
use tracing::error;

/// One storefront session: a catalog, the process-wide account
/// directory, the active user, and their cart.
pub struct Session {
    catalog: Catalog,
    directory: AccountDirectory,
    cart: Cart,
    user: Option<User>,
}

impl Session {
    /// Start a session over a seeded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            directory: AccountDirectory::new(),
            cart: Cart::new(),
            user: None,
        }
    }

    /// Run the menu loop until the user exits
    pub fn run<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        loop {
            let keep_going = match self.user {
                None => self.auth_menu(p)?,
                Some(_) => self.store_menu(p)?,
            };
            if !keep_going {
                p.say("Goodbye!")?;
                return Ok(());
            }
        }
    }

    fn auth_menu<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<bool> {
        p.say("\nWelcome! Please choose an option:")?;
        p.say("1. Sign Up")?;
        p.say("2. Log In")?;
        p.say("3. Exit")?;

        match p.read_choice("Enter choice (1-3): ", 1, 3)? {
            1 => self.sign_up(p)?,
            2 => self.log_in(p)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn sign_up<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        p.say("\n--- Sign Up ---")?;
        let username = p.read_non_empty("Enter a username (min. 3 characters): ")?;
        let password = p.read_non_empty("Enter a password (min. 3 characters): ")?;
        let email = p.read_non_empty("Enter your email address: ")?;

        match self.directory.register(&username, &password, &email) {
            Ok(user) => {
                p.say("Sign-up successful!")?;
                self.user = Some(user);
            }
            Err(e) => self.show_error(p, e)?,
        }
        Ok(())
    }

    fn log_in<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        p.say("\n--- Log In ---")?;
        let username = p.read_non_empty("Enter your username: ")?;
        let password = p.read_non_empty("Enter your password: ")?;

        match self.directory.authenticate(&username, &password) {
            Ok(user) => {
                p.say("Log in successful!")?;
                self.user = Some(user);
            }
            Err(e) => self.show_error(p, e)?,
        }
        Ok(())
    }

    fn store_menu<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<bool> {
        p.say("\n--- Store Menu ---")?;
        p.say("1. Browse catalog")?;
        p.say("2. Add item to cart")?;
        p.say("3. Remove item from cart")?;
        p.say("4. Update item quantity")?;
        p.say("5. View cart")?;
        p.say("6. Checkout")?;
        p.say("7. Log out")?;
        p.say("8. Exit")?;

        match p.read_choice("Enter choice (1-8): ", 1, 8)? {
            1 => self.browse(p)?,
            2 => self.add_item(p)?,
            3 => self.remove_item(p)?,
            4 => self.update_quantity(p)?,
            5 => self.view_cart(p)?,
            6 => self.run_checkout(p)?,
            7 => {
                self.user = None;
                self.cart.clear();
                p.say("Logged out.")?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn browse<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        p.say("\n--- Catalog ---")?;
        for product in self.catalog.active_products() {
            p.say(&format!(
                "{}. {} - {}",
                product.id,
                product.name,
                product.price.display()
            ))?;
        }
        Ok(())
    }

    fn add_item<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        let id = self.read_product_id(p)?;
        let Some(product) = self.catalog.get(id).cloned() else {
            p.say("No such product in the catalog.")?;
            return Ok(());
        };
        let quantity = p.read_choice("Enter quantity: ", 1, 999)?;

        match self.cart.add(&product, quantity) {
            Ok(()) => p.say(&format!("Added {} of {} to cart.", quantity, product.name))?,
            Err(e) => self.show_error(p, e)?,
        }
        Ok(())
    }

    fn remove_item<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        let id = self.read_product_id(p)?;
        match self.cart.remove(id) {
            Ok(()) => p.say(&format!("Removed product ID {} from cart.", id))?,
            Err(e) => self.show_error(p, e)?,
        }
        Ok(())
    }

    fn update_quantity<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        let id = self.read_product_id(p)?;
        let quantity = p.read_choice("Enter new quantity: ", 1, 999)?;
        match self.cart.update_quantity(id, quantity) {
            Ok(()) => p.say("Quantity updated.")?,
            Err(e) => self.show_error(p, e)?,
        }
        Ok(())
    }

    fn view_cart<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        p.say("\n--- Cart ---")?;
        for line in self.cart.lines() {
            let name = self
                .catalog
                .get(line.product_id)
                .map(|prod| prod.name.as_str())
                .unwrap_or("<unknown>");
            match self.cart.line_total(line, &self.catalog) {
                Ok(total) => p.say(&format!(
                    "{} x{} - {}",
                    name,
                    line.quantity,
                    total.display()
                ))?,
                Err(e) => self.show_error(p, e)?,
            }
        }
        match self.cart.grand_total(&self.catalog) {
            Ok(total) => p.say(&format!("Total: {}", total.display()))?,
            Err(e) => self.show_error(p, e)?,
        }
        Ok(())
    }

    fn run_checkout<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> io::Result<()> {
        if self.cart.is_empty() {
            self.show_error(p, ShopError::EmptyCart)?;
            return Ok(());
        }

        // Collect a shipping address before the core validates it
        if self.active_user().shipping_address.is_none() {
            let city = p.read_non_empty("Enter your shipping city: ")?;
            let province = p.read_non_empty("Enter your shipping province: ")?;
            let address = format!("{}, {}", city, province);

            let username = self.active_user().username.clone();
            if let Err(e) = self.directory.set_shipping_address(&username, &address) {
                self.show_error(p, e)?;
                return Ok(());
            }
            if let Some(user) = self.user.as_mut() {
                user.shipping_address = Some(address.clone());
            }
            p.say(&format!("Shipping to: {}", address))?;
        }

        p.say("\nChoose payment method:")?;
        for (i, method) in PaymentMethod::all().iter().enumerate() {
            p.say(&format!("{}. {}", i + 1, method))?;
        }
        let choice = p.read_choice("Enter your choice (1-3): ", 1, 3)?;
        let method = PaymentMethod::all()[choice as usize - 1];

        match checkout(&self.cart, &self.catalog, self.active_user(), method) {
            Ok(outcome) => {
                p.say(&outcome.confirmation)?;
                p.say("Checkout complete. Thank you for your purchase!")?;
                p.say(&format!("\n{}", outcome.receipt))?;
                // The cart is the caller's to reset
                self.cart.clear();
            }
            Err(e) => self.show_error(p, e)?,
        }
        Ok(())
    }

    fn read_product_id<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
    ) -> io::Result<u32> {
        p.read_choice("Enter product ID: ", 1, u32::MAX)
    }

    fn show_error<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
        e: ShopError,
    ) -> io::Result<()> {
        if e.is_invariant_violation() {
            error!("Invariant violation: {}", e);
        }
        p.say(&format!("Error: {}", e))
    }

    fn active_user(&self) -> &User {
        // store_menu is only reachable with a logged-in user
        self.user.as_ref().expect("store menu without active user")
    }
}
