//! User-visible strings.
//!
//! Defaults are the salon's Russian copy; every string can be overridden from
//! the `[messages]` config section.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CommerceError, LoadError, SelectionError};
use crate::storefront::Notice;

/// Literal strings used by the renderer and by notices.
///
/// `{name}` and `{size}` placeholders are substituted where noted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub page_title: String,
    pub nothing_found: String,
    pub load_failed: String,
    pub cart_empty: String,
    pub any_option: String,
    pub color_label: String,
    pub sizes_label: String,
    /// Cart row label before the size.
    pub size_label: String,
    pub choose_size: String,
    pub total_label: String,
    pub checkout_button: String,
    pub submit_button: String,
    pub cancel_button: String,
    pub apply_filters: String,
    pub reset_filters: String,
    pub min_price: String,
    pub max_price: String,
    pub name_field: String,
    pub phone_field: String,
    /// `{name}`, `{size}`.
    pub added_to_cart: String,
    pub size_unavailable: String,
    pub product_not_found: String,
    pub cart_overflow: String,
    pub empty_cart_checkout: String,
    pub form_closed: String,
    /// `{name}`.
    pub order_thanks: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            page_title: "Каталог платьев".to_string(),
            nothing_found: "По вашему запросу ничего не найдено.".to_string(),
            load_failed: "Ошибка загрузки товаров.".to_string(),
            cart_empty: "Корзина пуста".to_string(),
            any_option: "Все".to_string(),
            color_label: "Цвет".to_string(),
            sizes_label: "Размеры".to_string(),
            size_label: "размер".to_string(),
            choose_size: "Выбрать размер".to_string(),
            total_label: "Итого".to_string(),
            checkout_button: "Оформить заявку".to_string(),
            submit_button: "Отправить".to_string(),
            cancel_button: "Отмена".to_string(),
            apply_filters: "Применить".to_string(),
            reset_filters: "Сбросить".to_string(),
            min_price: "Цена от".to_string(),
            max_price: "Цена до".to_string(),
            name_field: "Имя".to_string(),
            phone_field: "Телефон".to_string(),
            added_to_cart: "Товар добавлен: {name}, размер {size}".to_string(),
            size_unavailable: "Размер не доступен или введён неверно.".to_string(),
            product_not_found: "Товар не найден.".to_string(),
            cart_overflow: "Слишком большое количество товара.".to_string(),
            empty_cart_checkout: "Добавьте хотя бы одно платье в корзину!".to_string(),
            form_closed: "Форма заявки закрыта.".to_string(),
            order_thanks: "Спасибо, {name}! Мы свяжемся с вами по телефону.".to_string(),
        }
    }
}

impl Messages {
    /// Text for a notice shown to the shopper.
    pub fn notice(&self, notice: &Notice) -> String {
        match notice {
            Notice::Added { product_name, size, .. } => self
                .added_to_cart
                .replace("{name}", product_name)
                .replace("{size}", size),
            Notice::OrderPlaced { customer_name, .. } => self
                .order_thanks
                .replace("{name}", customer_name.as_deref().unwrap_or("")),
            Notice::Rejected(err) => self.error(err),
        }
    }

    /// Text for an error shown to the shopper.
    pub fn error(&self, err: &CommerceError) -> String {
        match err {
            CommerceError::Load(LoadError::Fetch(_))
            | CommerceError::Load(LoadError::Parse(_))
            | CommerceError::Load(LoadError::MissingColumn(_)) => self.load_failed.clone(),
            CommerceError::Selection(SelectionError::ProductNotFound(_)) => {
                self.product_not_found.clone()
            }
            CommerceError::Selection(SelectionError::NoSize(_))
            | CommerceError::Selection(SelectionError::SizeUnavailable { .. }) => {
                self.size_unavailable.clone()
            }
            CommerceError::Selection(SelectionError::Overflow)
            | CommerceError::Checkout(CheckoutError::Overflow) => self.cart_overflow.clone(),
            CommerceError::Checkout(CheckoutError::EmptyCart) => self.empty_cart_checkout.clone(),
            CommerceError::Checkout(CheckoutError::FormHidden) => self.form_closed.clone(),
            CommerceError::Serialization(msg) => msg.clone(),
        }
    }
}
