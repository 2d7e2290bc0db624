//! WhatsApp pairing QR code modal.

use leptos::prelude::*;

#[component]
pub fn QrModal(qr: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--qr" on:click=move |ev| ev.stop_propagation()>
                <h2>"Conectar WhatsApp"</h2>
                <p class="dialog__hint">"Escaneie no seu WhatsApp (Aparelhos conectados)"</p>
                <div class="dialog__qr-frame">
                    <img src=qr alt="QR Code" width="256" height="256"/>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Fechar"</button>
                </div>
            </div>
        </div>
    }
}
