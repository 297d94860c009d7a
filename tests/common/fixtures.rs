/// The generator's output for the `web3intf.h` page, verbatim.
pub const WEB3INTF_8H_JS: &str = r#"var web3intf_8h =
[
    [ "TParam_eth_getTransactionCount", "struct_t_param__eth__get_transaction_count.html", "struct_t_param__eth__get_transaction_count" ],
    [ "TParam_eth_getBalance", "struct_t_param__eth__get_balance.html", "struct_t_param__eth__get_balance" ],
    [ "TParam_eth_sendRawTransaction", "struct_t_param__eth__send_raw_transaction.html", "struct_t_param__eth__send_raw_transaction" ],
    [ "TParam_eth_getStorageAt", "struct_t_param__eth__get_storage_at.html", "struct_t_param__eth__get_storage_at" ],
    [ "TParam_eth_getTransactionReceipt", "struct_t_param__eth__get_transaction_receipt.html", "struct_t_param__eth__get_transaction_receipt" ],
    [ "TParam_eth_call", "struct_t_param__eth__call.html", "struct_t_param__eth__call" ],
    [ "Param_eth_call", "web3intf_8h.html#a9e5a37932b7d18412a47bd4942121300", null ],
    [ "Param_eth_getBalance", "web3intf_8h.html#ac2dc027bd673cfe38ee124d17eb9cdc9", null ],
    [ "Param_eth_getStorageAt", "web3intf_8h.html#a60193c7d198da76496d0c20065cc1a45", null ],
    [ "Param_eth_getTransactionCount", "web3intf_8h.html#af60968cddc872b9f87fbfa4f177c7cc6", null ],
    [ "Param_eth_getTransactionReceipt", "web3intf_8h.html#af16395f7148bffd6b025dbe680b88c8f", null ],
    [ "Param_eth_sendRawTransaction", "web3intf_8h.html#afa9fbcf8be2b8e8901a1725cf91d0287", null ],
    [ "web3_eth_call", "web3intf_8h.html#a7116548e501f02dd2d2cda471a1dae4f", null ],
    [ "web3_eth_gasPrice", "web3intf_8h.html#a68e5b31310d0023ebf4b4403e87fe4b7", null ],
    [ "web3_eth_getBalance", "web3intf_8h.html#a5d417a933aa22d1d1034feda5fa23e98", null ],
    [ "web3_eth_getStorageAt", "web3intf_8h.html#a5bded37fe47d7967324a7c453752a58f", null ],
    [ "web3_eth_getTransactionCount", "web3intf_8h.html#a6561f38f788b3ebe93c66a1db255377a", null ],
    [ "web3_eth_getTransactionReceiptStatus", "web3intf_8h.html#a114d1baf518f248dfad3d64ccca67f81", null ],
    [ "web3_eth_sendRawTransaction", "web3intf_8h.html#ae65319be9cc0257c333a14ed4ab504cf", null ],
    [ "web3_init", "web3intf_8h.html#a1b4a7ab4c423675490f21482bfbde5ff", null ]
];"#;
